//! DOM widgets for the tweak panel.
//!
//! Widgets only translate input events into `ParamPanel::set`; the panel model
//! owns validation and forwards accepted values onto the scene.

use crate::constants::{PANEL_CLOSE_LABEL, PANEL_ID, PANEL_OPEN_LABEL};
use crate::dom::{self, Listener};
use rings_core::{ParamId, ParamKind, ParamPanel, ParamValue};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn element<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{tag}>: {e:?}"))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("<{tag}> has unexpected type"))
}

fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append: {e:?}"))
}

fn number_step(min: f32, max: f32) -> f32 {
    ((max - min) / 100.0).max(0.001)
}

fn param_input(
    document: &web::Document,
    panel: &Rc<RefCell<ParamPanel>>,
    id: ParamId,
) -> anyhow::Result<(web::HtmlElement, Listener)> {
    let (name, kind, value) = {
        let p = panel.borrow();
        let param = p.param(id)?;
        (param.name.clone(), param.kind, param.value().clone())
    };
    let label: web::HtmlElement = element(document, "label")?;
    label.set_inner_text(&name);
    let input: web::HtmlInputElement = element(document, "input")?;
    match (kind, &value) {
        (ParamKind::Number { min, max }, ParamValue::Number(v)) => {
            input.set_type("range");
            input.set_min(&min.to_string());
            input.set_max(&max.to_string());
            input.set_step(&number_step(min, max).to_string());
            input.set_value(&v.to_string());
        }
        (ParamKind::Color, ParamValue::Color(hex)) => {
            input.set_type("color");
            input.set_value(hex);
        }
        _ => anyhow::bail!("parameter `{name}` holds a value of the wrong kind"),
    }
    append(&label, &input)?;

    let panel = panel.clone();
    let source = input.clone();
    let listener = dom::listen(input.unchecked_ref(), "input", move |_: web::Event| {
        let raw = source.value();
        let value = match kind {
            ParamKind::Number { .. } => match raw.parse::<f32>() {
                Ok(v) => ParamValue::Number(v),
                Err(_) => return,
            },
            ParamKind::Color => ParamValue::Color(raw),
        };
        if let Err(e) = panel.borrow_mut().set(id, value) {
            log::warn!("[panel] {e}");
        }
    });
    Ok((label, listener))
}

/// Build the collapsible panel into `<body>`; returns the listener handles.
pub fn mount_panel(
    document: &web::Document,
    panel: &Rc<RefCell<ParamPanel>>,
) -> anyhow::Result<Vec<Listener>> {
    let root: web::HtmlElement = element(document, "div")?;
    root.set_id(PANEL_ID);
    let toggle: web::HtmlElement = element(document, "button")?;
    toggle.set_class_name("panel-toggle");
    let body: web::HtmlElement = element(document, "div")?;
    body.set_class_name("panel-body");
    append(&root, &toggle)?;
    append(&root, &body)?;

    let mut listeners = Vec::new();
    let folders: Vec<(String, Vec<ParamId>)> = panel
        .borrow()
        .folders()
        .iter()
        .map(|f| (f.name.clone(), f.params.to_vec()))
        .collect();
    for (name, params) in folders {
        let details: web::HtmlElement = element(document, "details")?;
        let summary: web::HtmlElement = element(document, "summary")?;
        summary.set_inner_text(&name);
        append(&details, &summary)?;
        for id in params {
            let (row, listener) = param_input(document, panel, id)?;
            append(&details, &row)?;
            listeners.push(listener);
        }
        append(&body, &details)?;
    }

    let apply_closed = {
        let root = root.clone();
        let toggle = toggle.clone();
        move |closed: bool| {
            if closed {
                dom::add_class(&root, "closed");
                toggle.set_inner_text(PANEL_OPEN_LABEL);
            } else {
                dom::remove_class(&root, "closed");
                toggle.set_inner_text(PANEL_CLOSE_LABEL);
            }
        }
    };
    apply_closed(panel.borrow().is_closed());
    let toggle_panel = panel.clone();
    listeners.push(dom::listen(
        toggle.unchecked_ref(),
        "click",
        move |_: web::MouseEvent| {
            let closed = toggle_panel.borrow_mut().toggle();
            apply_closed(closed);
        },
    ));

    let host = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    append(&host, &root)?;
    log::info!("[panel] mounted {} controls", listeners.len() - 1);
    Ok(listeners)
}
