// Stack-driven container - binds a NavigationManager to an egui frame
use crate::destination::Destination;
use crate::layout;
use crate::message::NavRequest;
use crate::state::NavigationManager;
use crate::style::Theme;
use eframe::egui;

/// A destination that knows how to draw itself.
pub trait Screen: Destination {
    /// Short label used in the breadcrumb trail.
    fn title(&self) -> String;

    /// Draws the screen body. Returning a request navigates after the frame.
    fn show(&self, ui: &mut egui::Ui) -> Option<NavRequest<Self>>;
}

#[derive(Debug, Clone, Copy)]
pub struct ContainerOptions {
    pub back_on_escape: bool,
    pub show_breadcrumbs: bool,
    pub theme: Theme,
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            back_on_escape: true,
            show_breadcrumbs: true,
            theme: Theme::default(),
        }
    }
}

/// The first `keep` entries of `path`, i.e. what a back gesture or a
/// breadcrumb jump writes back.
pub fn truncated<D: Clone>(path: &[D], keep: usize) -> Vec<D> {
    path[..keep.min(path.len())].to_vec()
}

/// What the back button or a back gesture writes back: the stack minus its
/// last entry, or nothing when already at the root.
pub fn back_writeback<D: Clone>(path: &[D]) -> Option<Vec<D>> {
    if path.is_empty() {
        None
    } else {
        Some(truncated(path, path.len() - 1))
    }
}

/// What clicking the crumb at `depth` writes back. Depth 0 is the root
/// crumb and keeps nothing; depth `i` keeps `path[..i]`, i.e. up to and
/// including the destination that crumb names. The crumb of the visible
/// screen (`depth == path.len()`) writes nothing.
pub fn crumb_writeback<D: Clone>(path: &[D], depth: usize) -> Option<Vec<D>> {
    if depth >= path.len() {
        None
    } else {
        Some(truncated(path, depth))
    }
}

enum Outcome<D: Destination> {
    Request(NavRequest<D>),
    Writeback(Vec<D>),
}

/// Renders the top of a navigation stack, or the root content when the
/// stack is empty, with a back button and breadcrumbs above it.
///
/// Back gestures (back button, Escape, Alt+Left, breadcrumb clicks) are
/// written back through [`NavigationManager::set_path`]; requests returned
/// by the root or the visible screen go through [`NavigationManager::apply`].
/// At most one of them takes effect per frame, the first one seen.
pub struct NavigationContainer<'a, D: Screen> {
    manager: &'a mut NavigationManager<D>,
    options: ContainerOptions,
    root_title: String,
}

impl<'a, D: Screen> NavigationContainer<'a, D> {
    pub fn new(manager: &'a mut NavigationManager<D>) -> Self {
        Self {
            manager,
            options: ContainerOptions::default(),
            root_title: layout::ROOT_CRUMB.to_string(),
        }
    }

    pub fn options(mut self, options: ContainerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn root_title(mut self, title: impl Into<String>) -> Self {
        self.root_title = title.into();
        self
    }

    pub fn show<R>(self, ctx: &egui::Context, root: R)
    where
        R: FnOnce(&mut egui::Ui) -> Option<NavRequest<D>>,
    {
        let options = self.options;
        let stack = self.manager.path();
        let mut outcome: Option<Outcome<D>> = None;

        let gesture_back = ctx.input(|i| {
            (options.back_on_escape && i.key_pressed(egui::Key::Escape))
                || (i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft))
        });
        if gesture_back {
            outcome = back_writeback(stack).map(Outcome::Writeback);
        }

        egui::TopBottomPanel::top("navstack_top_bar")
            .exact_height(layout::TOP_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let back = ui.add_enabled(
                        !stack.is_empty(),
                        egui::Button::new("◀ Back")
                            .min_size(egui::vec2(layout::BACK_BUTTON_WIDTH, 0.0)),
                    );
                    if back.clicked() && outcome.is_none() {
                        outcome = back_writeback(stack).map(Outcome::Writeback);
                    }

                    ui.add_space(layout::CRUMB_SPACING);
                    if options.show_breadcrumbs {
                        let clicked = breadcrumbs(ui, &self.root_title, stack, options.theme);
                        if let Some(path) = clicked.and_then(|depth| crumb_writeback(stack, depth)) {
                            if outcome.is_none() {
                                outcome = Some(Outcome::Writeback(path));
                            }
                        }
                    } else {
                        let title = stack
                            .last()
                            .map(Screen::title)
                            .unwrap_or_else(|| self.root_title.clone());
                        ui.strong(title);
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(layout::CONTENT_MARGIN);
                    let request = match stack.last() {
                        Some(top) => top.show(ui),
                        None => root(ui),
                    };
                    if let Some(request) = request {
                        if outcome.is_none() {
                            outcome = Some(Outcome::Request(request));
                        }
                    }
                });
        });

        // Apply deferred navigation
        match outcome {
            Some(Outcome::Writeback(path)) => {
                tracing::debug!(depth = path.len(), "container wrote back navigation stack");
                self.manager.set_path(path);
            }
            Some(Outcome::Request(request)) => self.manager.apply(request),
            None => {}
        }
    }
}

/// Draws `root › a › b`. Returns the depth of the clicked crumb, if any.
fn breadcrumbs<D: Screen>(
    ui: &mut egui::Ui,
    root_title: &str,
    stack: &[D],
    theme: Theme,
) -> Option<usize> {
    let mut jump = None;
    let titles = std::iter::once(root_title.to_string()).chain(stack.iter().map(Screen::title));

    for (depth, title) in titles.enumerate() {
        if depth > 0 {
            ui.label(egui::RichText::new(layout::CRUMB_SEPARATOR).color(theme.dim_text()));
        }

        let current = depth == stack.len();
        let (text, sense) = if current {
            (egui::RichText::new(title).strong(), egui::Sense::hover())
        } else {
            (
                egui::RichText::new(title).color(theme.dim_text()),
                egui::Sense::click(),
            )
        };

        if layout::truncated_label_with_sense(ui, text, sense).clicked() {
            jump = Some(depth);
        }
    }

    jump
}
