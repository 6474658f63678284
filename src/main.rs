use eframe::egui;
use std::env;
use navstack::config::Config;
use navstack::style::Theme;
use navstack::view::{ContainerOptions, NavigationContainer, Screen};
use navstack::{NavRequest, NavigationManager};

const THREAD_COUNT: u32 = 5;

// --- Routes ---

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Route {
    Inbox,
    Thread { id: u32 },
    Compose { reply_to: Option<u32> },
    Settings,
}

impl Screen for Route {
    fn title(&self) -> String {
        match self {
            Route::Inbox => "Inbox".to_string(),
            Route::Thread { id } => format!("Thread #{}", id),
            Route::Compose { reply_to: Some(id) } => format!("Reply to #{}", id),
            Route::Compose { reply_to: None } => "New message".to_string(),
            Route::Settings => "Settings".to_string(),
        }
    }

    fn show(&self, ui: &mut egui::Ui) -> Option<NavRequest<Self>> {
        ui.heading(self.title());
        ui.separator();

        match self {
            Route::Inbox => {
                let mut request = None;
                for id in 1..=THREAD_COUNT {
                    if ui.button(format!("📧 Thread #{}", id)).clicked() {
                        request = Some(NavRequest::Navigate(Route::Thread { id }));
                    }
                }
                ui.add_space(10.0);
                if ui.button("✏ Compose").clicked() {
                    request = Some(NavRequest::Navigate(Route::Compose { reply_to: None }));
                }
                request
            }
            Route::Thread { id } => {
                ui.label(format!("Messages in thread #{}", id));
                ui.add_space(10.0);
                if ui.button("↩ Reply").clicked() {
                    return Some(NavRequest::Navigate(Route::Compose { reply_to: Some(*id) }));
                }
                if *id < THREAD_COUNT && ui.button("Next thread ▶").clicked() {
                    return Some(NavRequest::Navigate(Route::Thread { id: id + 1 }));
                }
                if ui.button("Back to inbox").clicked() {
                    return Some(NavRequest::NavigateBackTo(Route::Inbox));
                }
                None
            }
            Route::Compose { .. } => {
                ui.label("Draft editing is not part of this demo.");
                ui.add_space(10.0);
                if ui.button("Send").clicked() {
                    return Some(NavRequest::back());
                }
                if ui.button("Discard and go back two").clicked() {
                    return Some(NavRequest::NavigateBack(2));
                }
                None
            }
            Route::Settings => {
                if ui.button("Close all screens").clicked() {
                    return Some(NavRequest::NavigateToRoot);
                }
                None
            }
        }
    }
}

fn root_view(ui: &mut egui::Ui) -> Option<NavRequest<Route>> {
    ui.heading("navstack demo");
    ui.label("Push screens, then go back with the button, Escape, Alt+Left or the breadcrumbs.");
    ui.add_space(10.0);

    if ui.button("Open inbox").clicked() {
        return Some(NavRequest::Navigate(Route::Inbox));
    }
    if ui.button("Open thread #3 via inbox").clicked() {
        return Some(NavRequest::NavigateAll(vec![
            Route::Inbox,
            Route::Thread { id: 3 },
        ]));
    }
    if ui.button("Restore a reply draft").clicked() {
        return Some(NavRequest::Replace(vec![
            Route::Inbox,
            Route::Thread { id: 1 },
            Route::Compose { reply_to: Some(1) },
        ]));
    }
    if ui.button("Settings").clicked() {
        return Some(NavRequest::Navigate(Route::Settings));
    }
    None
}

// --- App ---

struct DemoApp {
    navigation: NavigationManager<Route>,
    options: ContainerOptions,
}

impl DemoApp {
    fn new(cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        let theme = Theme::from_mode(&config.theme.mode);
        theme.apply(&cc.egui_ctx);

        let mut navigation = NavigationManager::new();
        navigation.subscribe(|path: &[Route]| {
            tracing::info!(depth = path.len(), top = ?path.last(), "route changed");
        });

        Self {
            navigation,
            options: ContainerOptions {
                back_on_escape: config.navigation.back_on_escape,
                show_breadcrumbs: config.navigation.show_breadcrumbs,
                theme,
            },
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        NavigationContainer::new(&mut self.navigation)
            .options(self.options)
            .show(ctx, root_view);
    }
}

fn main() -> eframe::Result<()> {
    // Logging is configured from the file, so install it before reporting load errors
    let loaded = Config::try_load();
    let filter = loaded
        .as_ref()
        .map(|c| c.logging.filter.clone())
        .unwrap_or_else(|_| "info".to_string());
    navstack::logging::init(&filter);
    let config = Config::or_default(loaded);

    if env::args().any(|arg| arg == "--write-config") {
        if let Err(e) = config.save() {
            tracing::error!(error = %e, "could not write configuration");
        }
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    tracing::info!("starting navstack demo");
    let app_name = config.window.title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Ok(Box::new(DemoApp::new(cc, &config)))),
    )
}
