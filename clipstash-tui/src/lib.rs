pub mod error;
pub use error::AppError;

pub mod config;
pub use config::Config;

pub mod logging;
pub use logging::Logger;

pub mod controller {

    pub mod actions;
    pub use actions::Action;

    pub mod action_dispatcher;
    pub use action_dispatcher::{ActionDispatcher, DispatcherStats};

    pub mod event_loop;
    pub use event_loop::EventLoop;
}

pub mod model {
    pub mod app_state;
    pub use app_state::{AppState, Behavior};

    pub mod ui_state;
    pub use ui_state::{
        AddItemForm, ContextRow, FormField, Notification, NotificationLevel, UIOverlay, UIState,
    };
}

pub mod view {
    pub mod theme;

    pub mod ui;
    pub use ui::{RenderStats, UIRenderer, centered_rect};

    pub mod components {
        pub mod add_item_overlay;
        pub use add_item_overlay::AddItemOverlay;
        pub mod confirm_overlay;
        pub use confirm_overlay::ConfirmOverlay;
        pub mod help_overlay;
        pub use help_overlay::HelpOverlay;
        pub mod item_list;
        pub use item_list::ItemList;
        pub mod notification_overlay;
        pub use notification_overlay::NotificationOverlay;
        pub mod status_bar;
        pub use status_bar::StatusBar;
    }

    pub use components::*;
}
