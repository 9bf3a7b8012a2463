use tao::event::{Event, StartCause};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tray_icon::menu::{Menu, MenuEvent, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

use super::{MenuItemId, Tray, TrayError};

const ICON_SIZE: u32 = 32;

enum UserEvent {
    Menu(MenuEvent),
}

/// The OS system tray, backed by `tray-icon` and a `tao` event loop.
///
/// Must be created and run on the main thread. A "Quit" entry is appended
/// below the application's entries when the loop starts.
pub struct NativeTray {
    event_loop: EventLoop<UserEvent>,
    menu: Menu,
    items: Vec<MenuItem>,
    title: String,
    tooltip: String,
}

impl NativeTray {
    pub fn new() -> Result<Self, TrayError> {
        // The event loop initialises the platform toolkit (GTK on Linux),
        // which must happen before any menu is built.
        let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
        Ok(Self {
            event_loop,
            menu: Menu::new(),
            items: Vec::new(),
            title: String::new(),
            tooltip: String::new(),
        })
    }
}

impl Tray for NativeTray {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_tooltip(&mut self, tooltip: &str) {
        self.tooltip = tooltip.to_string();
    }

    fn add_menu_item(&mut self, label: &str) -> Result<MenuItemId, TrayError> {
        let item = MenuItem::new(label, true, None);
        self.menu
            .append(&item)
            .map_err(|e| TrayError::Menu(e.to_string()))?;
        let id = MenuItemId(item.id().0.clone());
        self.items.push(item);
        Ok(id)
    }

    fn run<C, E>(self, mut on_click: C, on_exit: E) -> Result<(), TrayError>
    where
        C: FnMut(&MenuItemId) + 'static,
        E: FnOnce() + 'static,
    {
        let quit = MenuItem::new("Quit", true, None);
        self.menu
            .append_items(&[&PredefinedMenuItem::separator(), &quit])
            .map_err(|e| TrayError::Menu(e.to_string()))?;
        let quit_id = quit.id().clone();

        let proxy = self.event_loop.create_proxy();
        MenuEvent::set_event_handler(Some(move |event| {
            if proxy.send_event(UserEvent::Menu(event)).is_err() {
                tracing::trace!("Event loop closed, dropping menu event");
            }
        }));

        let NativeTray {
            event_loop,
            menu,
            items,
            title,
            tooltip,
        } = self;
        let mut on_exit = Some(on_exit);
        let mut tray_icon: Option<TrayIcon> = None;
        // Released together with the icon when the user quits.
        let mut menu_items = Some((items, quit));

        event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Wait;

            match event {
                // On macOS the tray icon can only be created once the loop is running.
                Event::NewEvents(StartCause::Init) => match build_tray_icon(&menu, &title, &tooltip) {
                    Ok(icon) => tray_icon = Some(icon),
                    Err(e) => {
                        tracing::error!(%e, "Could not create tray icon");
                        *control_flow = ControlFlow::ExitWithCode(1);
                    }
                },
                Event::UserEvent(UserEvent::Menu(event)) => {
                    if event.id == quit_id {
                        tray_icon.take();
                        menu_items.take();
                        if let Some(exit) = on_exit.take() {
                            exit();
                        }
                        *control_flow = ControlFlow::Exit;
                    } else {
                        on_click(&MenuItemId(event.id.0));
                    }
                }
                _ => {}
            }
        })
    }
}

fn build_tray_icon(menu: &Menu, title: &str, tooltip: &str) -> Result<TrayIcon, TrayError> {
    TrayIconBuilder::new()
        .with_menu(Box::new(menu.clone()))
        .with_title(title)
        .with_tooltip(tooltip)
        .with_icon(droplet_icon()?)
        .build()
        .map_err(|e| TrayError::Init(e.to_string()))
}

/// A filled blue circle.
fn droplet_icon() -> Result<Icon, TrayError> {
    let center = (ICON_SIZE as f32 - 1.0) / 2.0;
    let radius = ICON_SIZE as f32 / 2.0 - 1.0;
    let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);
    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let inside = dx * dx + dy * dy <= radius * radius;
            rgba.extend_from_slice(if inside { &[0, 105, 255, 255] } else { &[0, 0, 0, 0] });
        }
    }
    Icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).map_err(|e| TrayError::Init(e.to_string()))
}
