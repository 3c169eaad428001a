use crate::config::SimConfig;
use crate::diagnostics::{analyze_population, GeneProfile};
use crate::error::SimError;
use crate::grid::ItemKind;
use crate::world::{GenerationSummary, Phase, World};
use egui::{Color32, Rect, Vec2};
use tracing::{error, info};

const EMPTY_COLOR: Color32 = Color32::from_rgb(220, 220, 220);
const MONSTER_COLOR: Color32 = Color32::BLACK;
const CREATURE_COLOR: Color32 = Color32::from_rgb(40, 170, 60);
const STRAWBERRY_COLOR: Color32 = Color32::from_rgb(210, 40, 40);
const MUSHROOM_COLOR: Color32 = Color32::from_rgb(230, 200, 30);

/// Main application state
pub struct GridLifeApp {
    pub world: World,
    /// Config used for restarts; only the seed changes between runs
    pub config: SimConfig,
    pub paused: bool,
    pub steps_per_frame: u32,
    pub selected_cell: Option<(usize, usize)>,
    pub show_inspector: bool,
    /// Gene profile of the last scored generation's survivors
    pub last_profile: Option<GeneProfile>,
    pub last_error: Option<String>,
}

impl GridLifeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, world: World) -> Self {
        Self {
            config: world.config().clone(),
            world,
            paused: false,
            steps_per_frame: 1,
            selected_cell: None,
            show_inspector: true,
            last_profile: None,
            last_error: None,
        }
    }

    /// Start over with a fresh seed
    fn restart(&mut self) {
        self.config.seed = Some(rand::random());
        match World::new(self.config.clone()) {
            Ok(world) => {
                info!(seed = ?self.config.seed, "restarting simulation");
                self.world = world;
                self.last_profile = None;
                self.last_error = None;
                self.selected_cell = None;
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, e: SimError) {
        error!(error = %e, "simulation stopped");
        self.last_error = Some(e.to_string());
        self.paused = true;
    }

    /// Advance the world by one unit of work for its current phase
    fn tick(&mut self) {
        let result = match self.world.phase() {
            Phase::Uninitialized => self.world.initialize_first_generation(),
            Phase::Stepping => self.world.step_once(),
            Phase::Evaluating => {
                self.last_profile = Some(analyze_population(self.world.creatures()));
                self.world.advance_generation().map(|_| ())
            }
            Phase::Populating | Phase::Finished => Ok(()),
        };
        if let Err(e) = result {
            self.fail(e);
        }
    }

    fn cell_color(&self, row: usize, col: usize) -> Color32 {
        let grid = self.world.grid();
        if grid.occupancy_at(ItemKind::Monster, row, col) > 0 {
            MONSTER_COLOR
        } else if grid.occupancy_at(ItemKind::Creature, row, col) > 0 {
            CREATURE_COLOR
        } else if grid.occupancy_at(ItemKind::Strawberry, row, col) > 0 {
            STRAWBERRY_COLOR
        } else if grid.occupancy_at(ItemKind::Mushroom, row, col) > 0 {
            MUSHROOM_COLOR
        } else {
            EMPTY_COLOR
        }
    }

    fn summary_ui(ui: &mut egui::Ui, summary: &GenerationSummary) {
        ui.label(format!("Generation: {}", summary.generation));
        ui.label(format!("Survivors: {}", summary.survivors));
        ui.label(format!("Total life-force: {}", summary.total_life_force));
        ui.label(format!("Average: {:.2}", summary.average_life_force));
        ui.label(format!(
            "Deaths: {} starved, {} poisoned, {} eaten",
            summary.starved, summary.poisoned, summary.eaten
        ));
        ui.label(format!("Strawberries eaten: {}", summary.strawberries_eaten));
        ui.label(if summary.bred { "Bred" } else { "Random chromosomes" });
    }
}

impl eframe::App for GridLifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        if !self.paused {
            for _ in 0..self.steps_per_frame {
                if self.world.is_finished() || self.paused {
                    break;
                }
                self.tick();
            }
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("GridLife - Creature Evolution");

                ui.separator();

                if ui
                    .button(if self.paused { "▶ Play" } else { "⏸ Pause" })
                    .clicked()
                {
                    self.paused = !self.paused;
                }

                if self.paused && ui.button("Step").clicked() {
                    self.tick();
                }

                ui.separator();

                ui.label("Steps/frame:");
                ui.add(egui::Slider::new(&mut self.steps_per_frame, 1..=100).logarithmic(true));

                ui.separator();

                if ui.button("Restart (new seed)").clicked() {
                    self.restart();
                }

                ui.separator();

                ui.label(format!(
                    "Gen: {}/{}",
                    self.world.generation() + 1,
                    self.config.generations
                ));
                ui.label(format!(
                    "Step: {}/{}",
                    self.world.step(),
                    self.config.steps_per_generation
                ));
                ui.label(format!("Pop: {}", self.world.creatures().len()));
            });
        });

        egui::SidePanel::left("stats_panel")
            .min_width(250.0)
            .show(ctx, |ui| {
                ui.heading("Statistics");
                ui.separator();

                if let Some(seed) = self.config.seed {
                    ui.label(format!("Seed: {}", seed));
                }
                ui.label(format!("Phase: {:?}", self.world.phase()));
                ui.label(format!("Creatures: {}", self.world.creatures().len()));
                ui.label(format!("Monsters: {}", self.world.monsters().len()));
                let grid = self.world.grid();
                ui.label(format!(
                    "Strawberries: {}",
                    grid.total(ItemKind::Strawberry)
                ));
                ui.label(format!("Mushrooms: {}", grid.total(ItemKind::Mushroom)));

                if let Some(err) = &self.last_error {
                    ui.add_space(10.0);
                    ui.colored_label(Color32::RED, err.as_str());
                }

                if let Some(summary) = self.world.history().last() {
                    ui.add_space(10.0);
                    ui.separator();
                    ui.heading("Last Generation");
                    Self::summary_ui(ui, summary);
                }

                ui.add_space(10.0);
                ui.separator();
                ui.heading("Fitness History");
                egui::ScrollArea::vertical()
                    .id_salt("history")
                    .max_height(150.0)
                    .show(ui, |ui| {
                        for summary in self.world.history().iter().rev() {
                            ui.monospace(format!(
                                "{:>3}  {:>7.2}",
                                summary.generation, summary.average_life_force
                            ));
                        }
                    });

                if let Some(profile) = &self.last_profile {
                    ui.add_space(10.0);
                    ui.separator();
                    ui.heading("Survivor Genes");
                    ui.label(format!(
                        "Eat strawberries: {:.0}%",
                        100.0 * profile.eats_strawberries
                    ));
                    ui.label(format!(
                        "Eat mushrooms: {:.0}%",
                        100.0 * profile.eats_mushrooms
                    ));
                    ui.label(format!("Mean life-force: {:.1}", profile.mean_life_force));
                }

                ui.add_space(10.0);
                ui.separator();
                ui.heading("Recent Events");
                egui::ScrollArea::vertical()
                    .id_salt("events")
                    .show(ui, |ui| {
                        for event in self.world.events().recent(15).iter().rev() {
                            ui.label(event.as_str());
                        }
                    });

                ui.add_space(10.0);
                ui.checkbox(&mut self.show_inspector, "Show Inspector");
            });

        if self.show_inspector {
            egui::SidePanel::right("inspector_panel")
                .min_width(300.0)
                .show(ctx, |ui| {
                    ui.heading("Cell Inspector");
                    ui.separator();

                    let Some((row, col)) = self.selected_cell else {
                        ui.label("Click on a cell to inspect");
                        return;
                    };

                    ui.label(format!("Position: ({}, {})", row, col));
                    let grid = self.world.grid();
                    for kind in ItemKind::all() {
                        ui.label(format!(
                            "{}: {}",
                            kind.name(),
                            grid.occupancy_at(kind, row, col)
                        ));
                    }

                    ui.add_space(10.0);
                    ui.label("Creatures:");
                    ui.separator();

                    let mut any = false;
                    for creature in self.world.creatures_at(row, col) {
                        any = true;
                        ui.label(format!(
                            "#{}  life-force {}",
                            creature.tracking_number, creature.life_force
                        ));
                        ui.monospace(creature.chromosome().to_string());
                        ui.add_space(4.0);
                    }
                    if !any {
                        ui.label("None");
                    }
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let available_size = ui.available_size();
            let (rows, cols) = self.world.grid().dimensions();

            let cell_size =
                (available_size.x.min(available_size.y) / rows.max(cols) as f32).max(2.0);

            let (response, painter) = ui.allocate_painter(
                Vec2::new(cell_size * cols as f32, cell_size * rows as f32),
                egui::Sense::click(),
            );

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let click_pos = pos - response.rect.min;
                    let col = (click_pos.x / cell_size) as usize;
                    let row = (click_pos.y / cell_size) as usize;

                    if row < rows && col < cols {
                        self.selected_cell = Some((row, col));
                    }
                }
            }

            for row in 0..rows {
                for col in 0..cols {
                    let rect = Rect::from_min_size(
                        response.rect.min
                            + Vec2::new(col as f32 * cell_size, row as f32 * cell_size),
                        Vec2::new(cell_size, cell_size),
                    );

                    painter.rect_filled(rect, 0.0, self.cell_color(row, col));

                    if Some((row, col)) == self.selected_cell {
                        painter.rect_stroke(rect, 0.0, (2.0, Color32::WHITE));
                    }
                }
            }
        });
    }
}
