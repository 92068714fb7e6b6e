//! Mouse Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::Element;

    use mouse_pong::audio::WebAudio;
    use mouse_pong::platform::web::{MouseMoveSource, request_pointer_lock};
    use mouse_pong::renderer::DomRenderer;
    use mouse_pong::{Session, Settings};

    type WebSession = Session<WebAudio, DomRenderer, MouseMoveSource>;

    /// Element the game is built inside
    const ROOT_ID: &str = "pong";

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Mouse Pong starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let root = document
            .get_element_by_id(ROOT_ID)
            .ok_or("no #pong element")?;

        let settings = Rc::new(RefCell::new(Settings::load()));
        let renderer = DomRenderer::new(&document, &root)?;
        let audio = WebAudio::new(&settings.borrow());
        let pointer = MouseMoveSource::new(root.clone());

        let session = Rc::new(RefCell::new(Session::new(audio, renderer, pointer)));
        let now = window.performance().map(|p| p.now()).unwrap_or(0.0);
        session.borrow_mut().start(now);

        let (pointer_lock, mute_on_blur) = {
            let s = settings.borrow();
            (s.pointer_lock, s.mute_on_blur)
        };
        setup_click(&root, session.clone(), pointer_lock)?;
        setup_teardown(&window, session.clone())?;
        setup_mute_key(&window, session.clone(), settings)?;
        if mute_on_blur {
            setup_mute_on_blur(&window, session.clone())?;
        }

        request_animation_frame(session);

        log::info!("Mouse Pong running!");
        Ok(())
    }

    /// Click grabs the pointer and unblocks audio (both need a user gesture)
    fn setup_click(root: &Element, session: Rc<RefCell<WebSession>>, lock: bool) -> Result<(), JsValue> {
        let target = root.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            if lock {
                request_pointer_lock(&target);
            }
            session.borrow().audio().resume();
        });
        root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Leaving the page ends the session; the frame loop notices and stops
    fn setup_teardown(window: &web_sys::Window, session: Rc<RefCell<WebSession>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            session.borrow_mut().stop();
        });
        window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// `M` toggles mute and remembers the choice
    fn setup_mute_key(
        window: &web_sys::Window,
        session: Rc<RefCell<WebSession>>,
        settings: Rc<RefCell<Settings>>,
    ) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if !event.key().eq_ignore_ascii_case("m") {
                return;
            }
            let mut settings = settings.borrow_mut();
            let muted = settings.toggle_mute();
            settings.save();
            session.borrow_mut().audio_mut().apply_settings(&settings);
            log::info!("Audio {}", if muted { "muted" } else { "unmuted" });
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_mute_on_blur(window: &web_sys::Window, session: Rc<RefCell<WebSession>>) -> Result<(), JsValue> {
        for (event, muted) in [("blur", true), ("focus", false)] {
            let session = session.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                session.borrow_mut().audio_mut().set_muted(muted);
                log::info!("Audio {}", if muted { "muted (window blur)" } else { "restored" });
            });
            window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(session: Rc<RefCell<WebSession>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, frame loop halted");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(session, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(session: Rc<RefCell<WebSession>>, time: f64) {
        {
            let mut s = session.borrow_mut();
            if !s.is_running() {
                log::info!("Session stopped, frame loop halted");
                return;
            }
            s.frame(time);
        }

        request_animation_frame(session);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use mouse_pong::Session;
    use mouse_pong::audio::LogAudio;
    use mouse_pong::input::ManualPointer;
    use mouse_pong::platform::SyntheticClock;
    use mouse_pong::renderer::LogRenderer;

    env_logger::init();
    log::info!("Mouse Pong (native) starting...");
    log::info!("Native mode runs a headless match - build for wasm32 to play");

    let seconds: f64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(30.0);

    let mut clock = SyntheticClock::display_rate();
    let mut session = Session::new(LogAudio, LogRenderer::new(), ManualPointer::new());
    session.start(clock.now());

    // Scripted mouse: slow circles, so both paddles sweep and points happen
    let mut last = None;
    while clock.now() < seconds * 1000.0 {
        let t = clock.now() / 1000.0;
        session
            .pointer()
            .move_by((t * 1.3).cos() as f32 * 6.0, (t * 0.9).sin() as f32 * 9.0);
        last = Some(session.frame(clock.advance()));
    }
    session.stop();

    if let Some(snapshot) = last {
        println!("Final score after {seconds}s: {}", snapshot.score_line());
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
