//! Flashdeck entry point
//!
//! Handles platform-specific initialization and wires the DOM to the
//! session. The page is expected to provide the static elements the
//! shell drives: #card-stack, #time-label, #game-over, #spent-label,
//! #restart-btn, #edit-btn, #editor-panel, #done-btn, #prompt-input,
//! #answer-input, #add-card-btn, #card-list, #mark-buttons,
//! #mark-wrong-btn, #mark-correct-btn.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

    use flashdeck::platform::LocalStorage;
    use flashdeck::swipe::SwipeOutcome;
    use flashdeck::view::{self, CardFace, Tint};
    use flashdeck::{Card, CardStore, DragState, Editor, Session, Settings};

    /// Finger movement below this is a tap, not a drag (layout units)
    const TAP_SLOP: f32 = 4.0;

    /// App instance holding all state
    struct App {
        store: CardStore<LocalStorage>,
        session: Session,
        editor: Editor,
        settings: Settings,
        drag: DragState,
        drag_origin: Option<Vec2>,
        showing_editor: bool,
    }

    impl App {
        fn new() -> Self {
            let mut store = CardStore::new(LocalStorage::default());
            store.load();
            let settings = Settings::load(&LocalStorage::default());
            let session = Session::start(store.cards().to_vec());

            Self {
                store,
                session,
                editor: Editor::new(),
                settings,
                drag: DragState::default(),
                drag_origin: None,
                showing_editor: false,
            }
        }

        /// Reload the persisted deck and begin a fresh session
        fn start_session(&mut self) {
            self.store.load();
            self.session.restart(self.store.cards().to_vec());
            self.drag.clear();
            self.drag_origin = None;
        }

        /// Whether the top card accepts gestures right now
        fn interactive(&self) -> bool {
            !self.showing_editor && !self.session.is_over()
        }

        /// Complete a swipe: classify, cue feedback, drop the card
        fn finish_drag(&mut self) {
            match self.drag.release() {
                SwipeOutcome::None => {}
                outcome => {
                    if let Some(cue) = outcome.feedback() {
                        // No haptics on the web; the cue stays a log line
                        log::info!("Swipe feedback: {:?}", cue);
                    }
                    self.session
                        .mark_top(outcome == SwipeOutcome::MarkCorrect);
                    self.drag.clear();
                }
            }
            self.drag_origin = None;
        }
    }

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn element(id: &str) -> Option<Element> {
        document().get_element_by_id(id)
    }

    fn set_hidden(id: &str, hidden: bool) {
        if let Some(el) = element(id) {
            let _ = if hidden {
                el.class_list().add_1("hidden")
            } else {
                el.class_list().remove_1("hidden")
            };
        }
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = element(id) {
            el.set_text_content(Some(text));
        }
    }

    /// Build one card element for the stack
    fn card_element(app: &App, card: &Card, position: usize, total: usize) -> Element {
        let doc = document();
        let el = doc.create_element("div").unwrap();
        el.set_class_name("card");
        let is_top = position == total - 1;

        // Lower cards are presentation only
        let _ = el.set_attribute("aria-hidden", if is_top { "false" } else { "true" });

        let face = if is_top {
            view::card_face(card, app.drag.showing_answer, &app.settings)
        } else {
            view::card_face(card, false, &app.settings)
        };
        match face {
            CardFace::Single(text) => {
                let line = doc.create_element("p").unwrap();
                line.set_class_name("prompt");
                line.set_text_content(Some(text));
                let _ = el.append_child(&line);
            }
            CardFace::Full { prompt, answer } => {
                let line = doc.create_element("p").unwrap();
                line.set_class_name("prompt");
                line.set_text_content(Some(prompt));
                let _ = el.append_child(&line);
                if let Some(answer) = answer {
                    let line = doc.create_element("p").unwrap();
                    line.set_class_name("answer");
                    line.set_text_content(Some(answer));
                    let _ = el.append_child(&line);
                }
            }
        }

        let html: HtmlElement = el.clone().dyn_into().unwrap();
        let style = html.style();
        let stack_y = view::stacked_offset(position, total);
        if is_top {
            let _ = style.set_property(
                "transform",
                &format!(
                    "translate({}px, {stack_y}px) rotate({}deg)",
                    app.drag.x_translation(),
                    app.drag.rotation_degrees()
                ),
            );
            let _ = style.set_property("opacity", &app.drag.card_opacity().to_string());
            match view::swipe_tint(app.drag.offset.x, &app.settings) {
                Some(Tint::Green) => {
                    let _ = style.set_property("--tint", "var(--green)");
                }
                Some(Tint::Red) => {
                    let _ = style.set_property("--tint", "var(--red)");
                }
                None => {
                    let _ = style.set_property("--tint", "transparent");
                }
            }
            let _ = style.set_property(
                "--fill-opacity",
                &view::card_fill_opacity(&app.drag, &app.settings).to_string(),
            );
        } else {
            let _ = style.set_property("transform", &format!("translate(0px, {stack_y}px)"));
            let _ = style.set_property("pointer-events", "none");
        }
        el
    }

    /// Redraw everything from the current state
    fn render(app: &App) {
        set_text("time-label", &format!("Time: {}", app.session.remaining()));

        if let Some(stack) = element("card-stack") {
            stack.set_inner_html("");
            let cards = app.session.cards();
            for (position, card) in cards.iter().enumerate() {
                let _ = stack.append_child(&card_element(app, card, position, cards.len()));
            }
        }

        let over = app.session.is_over();
        set_hidden("game-over", !over);
        if over {
            set_text(
                "spent-label",
                &format!("You spent {} seconds", app.session.elapsed()),
            );
        }

        set_hidden("mark-buttons", !app.settings.shows_mark_buttons() || over);
        set_hidden("editor-panel", !app.showing_editor);
        if app.showing_editor {
            render_card_list(app);
        }
    }

    /// Rebuild the editor's card list (event handling is delegated, so
    /// rows carry their index as a data attribute)
    fn render_card_list(app: &App) {
        let Some(list) = element("card-list") else {
            return;
        };
        list.set_inner_html("");
        let doc = document();
        for (index, card) in app.store.cards().iter().enumerate() {
            let row = doc.create_element("li").unwrap();
            row.set_class_name("card-row");

            let prompt = doc.create_element("span").unwrap();
            prompt.set_class_name("row-prompt");
            prompt.set_text_content(Some(&card.prompt));
            let _ = row.append_child(&prompt);

            let answer = doc.create_element("span").unwrap();
            answer.set_class_name("row-answer");
            answer.set_text_content(Some(&card.answer));
            let _ = row.append_child(&answer);

            let delete = doc.create_element("button").unwrap();
            delete.set_class_name("delete-btn");
            delete.set_text_content(Some("Delete"));
            let _ = delete.set_attribute("data-index", &index.to_string());
            let _ = row.append_child(&delete);

            let _ = list.append_child(&row);
        }
    }

    fn setup_timer(app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut()>::new(move || {
            app.borrow_mut().session.on_tick();
            render(&app.borrow());
        });
        let _ = web_sys::window()
            .unwrap()
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                1_000,
            );
        closure.forget();
    }

    fn setup_auto_pause(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let doc = document();

        // Visibility change (tab switch, minimize)
        {
            let app = app.clone();
            let doc_clone = doc.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if doc_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    app.borrow_mut().session.on_background();
                    log::info!("Paused (tab hidden)");
                } else {
                    app.borrow_mut().session.on_foreground();
                    log::info!("Resumed (tab visible)");
                }
            });
            let _ = doc.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur/focus (click outside)
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().session.on_background();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().session.on_foreground();
            });
            let _ =
                window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_drag(app: Rc<RefCell<App>>) {
        let doc = document();

        if let Some(stack) = element("card-stack") {
            let app_down = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::PointerEvent| {
                let mut a = app_down.borrow_mut();
                if a.interactive() {
                    a.drag_origin = Some(Vec2::new(event.client_x() as f32, event.client_y() as f32));
                }
            });
            let _ = stack
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::PointerEvent| {
                let mut a = app.borrow_mut();
                if let Some(origin) = a.drag_origin {
                    let here = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                    a.drag.drag_to(here - origin);
                    drop(a);
                    render(&app.borrow());
                }
            });
            let _ = doc
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::PointerEvent| {
                {
                    let mut a = app.borrow_mut();
                    if a.drag_origin.is_none() {
                        return;
                    }
                    if a.drag.offset.length() < TAP_SLOP {
                        // A stationary release is a tap: flip the card
                        a.drag.offset = Vec2::ZERO;
                        a.drag.toggle_answer();
                        a.drag_origin = None;
                    } else {
                        a.finish_drag();
                    }
                }
                render(&app.borrow());
            });
            let _ = document()
                .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        on_click("restart-btn", app.clone(), |a| a.start_session());

        on_click("edit-btn", app.clone(), |a| a.showing_editor = true);

        // Closing the editor starts a fresh session over the edited deck
        on_click("done-btn", app.clone(), |a| {
            a.showing_editor = false;
            a.start_session();
        });

        on_click("add-card-btn", app.clone(), |a| {
            if let (Some(prompt), Some(answer)) =
                (input_value("prompt-input"), input_value("answer-input"))
            {
                a.editor.draft_prompt = prompt;
                a.editor.draft_answer = answer;
                a.editor.add_card(&mut a.store);
                // A rejected add leaves the drafts in the fields
                set_input_value("prompt-input", &a.editor.draft_prompt);
                set_input_value("answer-input", &a.editor.draft_answer);
            }
        });

        on_click("mark-wrong-btn", app.clone(), |a| {
            if a.interactive() {
                a.session.mark_top(false);
                a.drag.clear();
            }
        });
        on_click("mark-correct-btn", app.clone(), |a| {
            if a.interactive() {
                a.session.mark_top(true);
                a.drag.clear();
            }
        });

        // One delegated listener covers every delete button ever rendered
        if let Some(list) = element("card-list") {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
                let index = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|el| el.get_attribute("data-index"))
                    .and_then(|raw| raw.parse::<usize>().ok());
                if let Some(index) = index {
                    let mut a = app.borrow_mut();
                    a.store.remove_at(index);
                    drop(a);
                    render(&app.borrow());
                }
            });
            let _ =
                list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn on_click(id: &str, app: Rc<RefCell<App>>, action: impl Fn(&mut App) + 'static) {
        if let Some(btn) = element(id) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                action(&mut app.borrow_mut());
                render(&app.borrow());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn input_value(id: &str) -> Option<String> {
        element(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
    }

    fn set_input_value(id: &str, value: &str) {
        if let Some(input) = element(id).and_then(|el| el.dyn_into::<HtmlInputElement>().ok()) {
            input.set_value(value);
        }
    }

    pub fn run() {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");
        log::info!("Flashdeck starting");

        let app = Rc::new(RefCell::new(App::new()));
        setup_timer(app.clone());
        setup_auto_pause(app.clone());
        setup_drag(app.clone());
        setup_buttons(app.clone());
        render(&app.borrow());
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flashdeck (native) starting...");
    log::info!("The UI is web-only - run with `trunk serve` for the browser version");

    // Smoke-test the session logic
    println!("\nRunning session smoke test...");
    smoke_test_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_test_session() {
    use flashdeck::{Card, Session, classify_swipe};

    let mut session = Session::start(vec![Card::example(); 3]);
    session.on_tick();
    assert_eq!(session.remaining(), 99);

    for _ in 0..3 {
        assert!(matches!(
            classify_swipe(180.0),
            flashdeck::SwipeOutcome::MarkCorrect
        ));
        session.remove_top_card();
    }
    assert!(session.is_over(), "session should end on an empty stack");
    println!("✓ Session smoke test passed!");
}
