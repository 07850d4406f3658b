//! Main application struct.

use super::textures::TextureCache;
use crate::board::Board;
use crate::export::ExportControl;
use crate::input::InputState as CanvasInputState;
use crate::notifications::ToastManager;
use crate::settings::Settings;
use crate::settings_watcher::SettingsWatcher;
use crate::types::ItemId;
use gpui::{Entity, FocusHandle, Subscription};
use gpui_component::input::InputState;

/// Open rotation dialog for one item.
pub struct RotationPrompt {
    pub item_id: ItemId,
    pub input: Entity<InputState>,
    pub(crate) _subscription: Subscription,
}

pub struct MoodboardApp {
    pub board: Board,
    pub input_state: CanvasInputState,
    pub export: ExportControl,
    pub settings: Settings,
    pub settings_watcher: Option<SettingsWatcher>,
    pub toasts: ToastManager,
    pub textures: TextureCache,
    pub rotation_prompt: Option<RotationPrompt>,
    /// Sources still decoding on the background executor
    pub pending_loads: usize,
    pub focus_handle: FocusHandle,
}
