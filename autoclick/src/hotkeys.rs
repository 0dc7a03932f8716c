use {
    crate::{control::ControlFlags, report},
    anyhow::Context as _,
    global_hotkey::{
        hotkey::{Code, HotKey},
        GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
    },
    std::{sync::Arc, thread, time::Duration},
};

pub const TOGGLE_KEY: Code = Code::F9;
pub const EXIT_KEY: Code = Code::F10;

/// Keeps the OS hotkey registrations alive for the process lifetime;
/// dropping it unregisters them.
pub struct HotkeyController {
    _manager: GlobalHotKeyManager,
}

/// Registers the toggle and exit hotkeys and spawns the listener thread.
/// The listener flips `flags` asynchronously to the scan loop; the loop
/// picks the change up on its next tick.
pub fn spawn(flags: Arc<ControlFlags>, scan_interval: Duration) -> anyhow::Result<HotkeyController> {
    let manager = GlobalHotKeyManager::new().context("failed to create global hotkey manager")?;
    let toggle = HotKey::new(None, TOGGLE_KEY);
    let exit = HotKey::new(None, EXIT_KEY);
    manager
        .register(toggle)
        .with_context(|| format!("failed to register {:?}", TOGGLE_KEY))?;
    manager
        .register(exit)
        .with_context(|| format!("failed to register {:?}", EXIT_KEY))?;

    thread::spawn(move || {
        let receiver = GlobalHotKeyEvent::receiver();
        while let Ok(event) = receiver.recv() {
            if event.state != HotKeyState::Pressed {
                continue;
            }
            if event.id == toggle.id() {
                let active = flags.toggle_active();
                report::activation(active, scan_interval);
            } else if event.id == exit.id() {
                flags.request_exit();
                report::exit_requested();
            }
        }
    });

    Ok(HotkeyController { _manager: manager })
}
