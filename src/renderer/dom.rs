//! DOM renderer
//!
//! Plain absolutely-positioned elements: two score labels, a center line and
//! an arena holding the ball and both paddles. Styling beyond position and
//! size comes from the host page's stylesheet.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::{Layout, Renderer};
use crate::sim::Snapshot;

pub struct DomRenderer {
    score_left: Element,
    score_right: Element,
    ball: HtmlElement,
    paddle_left: HtmlElement,
    paddle_right: HtmlElement,
    last_score: Option<(u32, u32)>,
}

fn create(document: &Document, parent: &Element, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element("div")?;
    el.set_class_name(class);
    parent.append_child(&el)?;
    Ok(el)
}

fn create_html(document: &Document, parent: &Element, class: &str) -> Result<HtmlElement, JsValue> {
    create(document, parent, class)?.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

fn place(el: &HtmlElement, left: Option<f32>, top: f32) {
    let style = el.style();
    if let Some(left) = left {
        let _ = style.set_property("left", &format!("{left}%"));
    }
    let _ = style.set_property("top", &format!("{top}%"));
}

impl DomRenderer {
    /// Build the scene inside `root`
    pub fn new(document: &Document, root: &Element) -> Result<Self, JsValue> {
        let app = create(document, root, "pong-app")?;
        let score_left = create(document, &app, "score-l")?;
        let score_right = create(document, &app, "score-r")?;
        create(document, &app, "center-line")?;
        let arena = create(document, &app, "arena")?;
        let ball = create_html(document, &arena, "ball")?;
        let paddle_left = create_html(document, &arena, "paddle-l")?;
        let paddle_right = create_html(document, &arena, "paddle-r")?;

        let height = Layout::from_snapshot(&Snapshot::default()).paddle_height;
        for paddle in [&paddle_left, &paddle_right] {
            let _ = paddle
                .style()
                .set_property("height", &format!("calc({height}% - 1em)"));
        }

        Ok(Self {
            score_left,
            score_right,
            ball,
            paddle_left,
            paddle_right,
            last_score: None,
        })
    }
}

impl Renderer for DomRenderer {
    fn draw(&mut self, snapshot: &Snapshot) {
        let layout = Layout::from_snapshot(snapshot);
        place(&self.ball, Some(layout.ball_left), layout.ball_top);
        place(&self.paddle_left, None, layout.left_paddle_top);
        place(&self.paddle_right, None, layout.right_paddle_top);

        // Text nodes only change on a point
        let score = (snapshot.left_score, snapshot.right_score);
        if self.last_score != Some(score) {
            self.score_left
                .set_text_content(Some(&snapshot.left_score.to_string()));
            self.score_right
                .set_text_content(Some(&snapshot.right_score.to_string()));
            self.last_score = Some(score);
        }
    }
}
