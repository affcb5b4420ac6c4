use crate::config::AppConfig;
use eframe::egui;
use mt_core::{Game, GameError, Notice, Outcome, QuestionCount, QuizSettings, Round, Submission};
use rand::{rngs::StdRng, SeedableRng};

pub struct MultitainmentApp {
    settings: QuizSettings,
    rng: StdRng,
    game: Game,
    answer_input: String,
    alert: Option<Notice>,
    last_outcome: Option<Outcome>,
}

impl MultitainmentApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::from_config(config)
    }

    pub fn from_config(config: AppConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            settings: config.quiz,
            rng,
            game: Game::new(),
            answer_input: String::new(),
            alert: None,
            last_outcome: None,
        }
    }

    fn start_game(&mut self) {
        let round = Round::generate(&self.settings, &mut self.rng);
        self.game.start(round);
        self.answer_input.clear();
        self.alert = None;
        self.last_outcome = None;
    }

    fn submit_answer(&mut self) {
        if self.alert.is_some() {
            return;
        }

        match self.game.submit(&self.answer_input) {
            Ok(Submission::Correct { .. }) => self.answer_input.clear(),
            // The wrong answer stays in the field so it can be corrected.
            Ok(Submission::Incorrect) => self.alert = Some(Notice::incorrect()),
            Ok(Submission::Finished(outcome)) => {
                self.alert = Some(outcome.notice());
                self.last_outcome = Some(outcome);
                self.answer_input.clear();
            }
            Err(GameError::AwaitingAcknowledgement) => {}
            Err(e) => {
                self.alert = e.notice();
                self.answer_input.clear();
            }
        }
    }

    fn dismiss_alert(&mut self) {
        self.alert = None;
        self.game.acknowledge();
    }

    fn question_text(&self) -> String {
        self.game
            .current_question()
            .map(|q| q.to_string())
            .unwrap_or_default()
    }
}

/// Returns `-1` or `+1` when one of the stepper buttons was clicked.
fn stepper(ui: &mut egui::Ui, label: String) -> Option<i8> {
    let mut step = None;
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_sized([28.0, 24.0], egui::Button::new("+")).clicked() {
                step = Some(1);
            }
            if ui.add_sized([28.0, 24.0], egui::Button::new("-")).clicked() {
                step = Some(-1);
            }
        });
    });
    step
}

impl eframe::App for MultitainmentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Enter that submits an answer must not also dismiss the alert it raises.
        let alert_was_open = self.alert.is_some();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Multitainment");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Start").clicked() {
                        self.start_game();
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(self.alert.is_none(), |ui| {
                ui.add_space(10.0);
                ui.label(egui::RichText::new("Multiplication tables").strong());

                let range = &mut self.settings.range;
                match stepper(ui, format!("From {}", range.min())) {
                    Some(1) => range.increment_min(),
                    Some(_) => range.decrement_min(),
                    None => {}
                }
                match stepper(ui, format!("To {}", range.max())) {
                    Some(1) => range.increment_max(),
                    Some(_) => range.decrement_max(),
                    None => {}
                }

                ui.add_space(15.0);
                ui.label(egui::RichText::new("Number of questions").strong());
                ui.horizontal(|ui| {
                    for count in QuestionCount::ALL {
                        ui.selectable_value(&mut self.settings.count, count, count.to_string());
                    }
                });

                ui.add_space(20.0);
                ui.separator();
                ui.add_space(20.0);

                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(self.question_text()).size(40.0).strong());
                    ui.add_space(15.0);

                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.answer_input)
                            .hint_text("Enter your answer")
                            .font(egui::TextStyle::Heading)
                            .desired_width(180.0)
                            .horizontal_align(egui::Align::Center),
                    );

                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        self.submit_answer();
                    }

                    if self.game.is_started() {
                        response.request_focus();
                    }

                    ui.add_space(10.0);

                    if ui
                        .add_sized([120.0, 36.0], egui::Button::new("Submit"))
                        .clicked()
                    {
                        self.submit_answer();
                    }

                    ui.add_space(15.0);

                    if let Some((answered, total)) = self.game.progress() {
                        ui.label(format!(
                            "Question {} of {}  ·  Mistakes: {}",
                            answered + 1,
                            total,
                            self.game.mistakes()
                        ));
                    } else if let Some(outcome) = &self.last_outcome {
                        ui.label(format!(
                            "Last round: {} mistakes in {}s",
                            outcome.mistakes,
                            outcome.elapsed_secs()
                        ));
                    }
                });
            });
        });

        if let Some(notice) = self.alert.clone() {
            let mut dismissed = false;
            egui::Window::new(notice.title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(notice.message);
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        if ui.button("OK").clicked() {
                            dismissed = true;
                        }
                    });
                });

            if dismissed || (alert_was_open && ctx.input(|i| i.key_pressed(egui::Key::Enter))) {
                self.dismiss_alert();
            }
        }
    }
}
