//! Live tweak panel model.
//!
//! Parameters live in named folders. Every edit goes through
//! [`ParamPanel::set`], which validates and clamps the value, stores it and
//! notifies the parameter's listeners. [`bind_scene`] registers the listeners
//! that forward edits onto the live lights and ring materials.
//!
//! Listeners must not register new listeners on the same parameter while
//! being notified.

use crate::color::{assign_hex, hex_to_rgb};
use crate::constants::{INTENSITY_RANGE, POSITION_RANGE, UNIT_RANGE};
use crate::scene::SceneState;
use crate::subscription::{Listeners, Subscription};
use fnv::FnvHashMap;
use glam::Vec3;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParamId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FolderId(usize);

impl ParamId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamKind {
    Number { min: f32, max: f32 },
    Color,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Number(f32),
    /// `#RRGGBB` string as produced by a colour picker.
    Color(String),
}

impl ParamValue {
    pub fn as_number(&self) -> Option<f32> {
        match self {
            ParamValue::Number(v) => Some(*v),
            ParamValue::Color(_) => None,
        }
    }

    pub fn as_color(&self) -> Option<&str> {
        match self {
            ParamValue::Color(c) => Some(c),
            ParamValue::Number(_) => None,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PanelError {
    #[error("unknown parameter id {0}")]
    UnknownParam(usize),
    #[error("unknown folder id {0}")]
    UnknownFolder(usize),
    #[error("parameter `{name}` expects a {expected} value")]
    KindMismatch { name: String, expected: &'static str },
    #[error("`{value}` is not a #RRGGBB colour for `{name}`")]
    InvalidColor { name: String, value: String },
}

pub struct Param {
    pub folder: FolderId,
    pub name: String,
    pub kind: ParamKind,
    value: ParamValue,
    listeners: Listeners<ParamValue>,
}

impl Param {
    pub fn value(&self) -> &ParamValue {
        &self.value
    }
}

pub struct Folder {
    pub name: String,
    pub params: SmallVec<[ParamId; 5]>,
}

#[derive(Default)]
pub struct ParamPanel {
    folders: Vec<Folder>,
    params: Vec<Param>,
    by_path: FnvHashMap<String, ParamId>,
    closed: bool,
}

fn path(folder: &str, name: &str) -> String {
    format!("{folder}/{name}")
}

impl ParamPanel {
    /// New panel, closed like the original GUI.
    pub fn new() -> Self {
        Self {
            closed: true,
            ..Default::default()
        }
    }

    pub fn add_folder(&mut self, name: &str) -> FolderId {
        self.folders.push(Folder {
            name: name.to_string(),
            params: SmallVec::new(),
        });
        FolderId(self.folders.len() - 1)
    }

    fn add_param(
        &mut self,
        folder: FolderId,
        name: &str,
        kind: ParamKind,
        value: ParamValue,
    ) -> Result<ParamId, PanelError> {
        let id = ParamId(self.params.len());
        let f = self
            .folders
            .get_mut(folder.0)
            .ok_or(PanelError::UnknownFolder(folder.0))?;
        f.params.push(id);
        self.by_path.insert(path(&f.name, name), id);
        self.params.push(Param {
            folder,
            name: name.to_string(),
            kind,
            value,
            listeners: Listeners::new(),
        });
        Ok(id)
    }

    pub fn add_number(
        &mut self,
        folder: FolderId,
        name: &str,
        initial: f32,
        range: (f32, f32),
    ) -> Result<ParamId, PanelError> {
        let (min, max) = range;
        self.add_param(
            folder,
            name,
            ParamKind::Number { min, max },
            ParamValue::Number(initial.clamp(min, max)),
        )
    }

    pub fn add_color(
        &mut self,
        folder: FolderId,
        name: &str,
        initial_hex: &str,
    ) -> Result<ParamId, PanelError> {
        self.add_param(
            folder,
            name,
            ParamKind::Color,
            ParamValue::Color(initial_hex.to_string()),
        )
    }

    pub fn param(&self, id: ParamId) -> Result<&Param, PanelError> {
        self.params.get(id.0).ok_or(PanelError::UnknownParam(id.0))
    }

    pub fn value(&self, id: ParamId) -> Result<&ParamValue, PanelError> {
        self.param(id).map(Param::value)
    }

    pub fn find(&self, folder: &str, name: &str) -> Option<ParamId> {
        self.by_path.get(&path(folder, name)).copied()
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Register a change listener; it sees every accepted value.
    pub fn on_change(
        &self,
        id: ParamId,
        callback: impl FnMut(&ParamValue) + 'static,
    ) -> Result<Subscription, PanelError> {
        Ok(self.param(id)?.listeners.subscribe(callback))
    }

    /// Validate, clamp, store and broadcast a new value. Returns the stored value.
    pub fn set(&mut self, id: ParamId, value: ParamValue) -> Result<ParamValue, PanelError> {
        let param = self
            .params
            .get_mut(id.0)
            .ok_or(PanelError::UnknownParam(id.0))?;
        let accepted = match (param.kind, value) {
            (ParamKind::Number { min, max }, ParamValue::Number(v)) => {
                ParamValue::Number(if v.is_nan() { min } else { v.clamp(min, max) })
            }
            (ParamKind::Color, ParamValue::Color(hex)) => {
                if hex_to_rgb(&hex).is_none() {
                    return Err(PanelError::InvalidColor {
                        name: param.name.clone(),
                        value: hex,
                    });
                }
                ParamValue::Color(hex)
            }
            (ParamKind::Number { .. }, ParamValue::Color(_)) => {
                return Err(PanelError::KindMismatch {
                    name: param.name.clone(),
                    expected: "number",
                })
            }
            (ParamKind::Color, ParamValue::Number(_)) => {
                return Err(PanelError::KindMismatch {
                    name: param.name.clone(),
                    expected: "colour",
                })
            }
        };
        param.value = accepted.clone();
        param.listeners.emit(&accepted);
        Ok(accepted)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn toggle(&mut self) -> bool {
        self.closed = !self.closed;
        self.closed
    }
}

fn bind_number(
    panel: &mut ParamPanel,
    folder: FolderId,
    name: &str,
    initial: f32,
    range: (f32, f32),
    scene: &Rc<RefCell<SceneState>>,
    apply: impl Fn(&mut SceneState, f32) + 'static,
) -> Result<Subscription, PanelError> {
    let id = panel.add_number(folder, name, initial, range)?;
    let scene = scene.clone();
    panel.on_change(id, move |value| {
        if let Some(v) = value.as_number() {
            apply(&mut scene.borrow_mut(), v);
        }
    })
}

fn bind_color(
    panel: &mut ParamPanel,
    folder: FolderId,
    name: &str,
    initial_hex: &str,
    scene: &Rc<RefCell<SceneState>>,
    apply: impl Fn(&mut SceneState, &str) + 'static,
) -> Result<Subscription, PanelError> {
    let id = panel.add_color(folder, name, initial_hex)?;
    let scene = scene.clone();
    panel.on_change(id, move |value| {
        if let Some(hex) = value.as_color() {
            apply(&mut scene.borrow_mut(), hex);
        }
    })
}

type AxisFn = fn(&mut Vec3) -> &mut f32;

fn axis_x(p: &mut Vec3) -> &mut f32 {
    &mut p.x
}

fn axis_y(p: &mut Vec3) -> &mut f32 {
    &mut p.y
}

fn axis_z(p: &mut Vec3) -> &mut f32 {
    &mut p.z
}

/// Build one folder per point light and per ring material, wired to `scene`.
pub fn bind_scene(
    panel: &mut ParamPanel,
    scene: &Rc<RefCell<SceneState>>,
) -> Result<Vec<Subscription>, PanelError> {
    let mut subs = Vec::new();
    let (lights, materials) = {
        let s = scene.borrow();
        let materials: Vec<_> = s.rings.iter().map(|r| r.material.clone()).collect();
        (s.point_lights.clone(), materials)
    };

    for (i, light) in lights.iter().enumerate() {
        let folder = panel.add_folder(&light.name);
        subs.push(bind_number(
            panel,
            folder,
            "intensity",
            light.intensity,
            INTENSITY_RANGE,
            scene,
            move |s, v| {
                if let Some(l) = s.point_light_mut(i) {
                    l.intensity = v;
                }
            },
        )?);
        subs.push(bind_color(
            panel,
            folder,
            "color",
            &light.color.to_hex(),
            scene,
            move |s, hex| {
                if let Some(l) = s.point_light_mut(i) {
                    assign_hex(&mut l.color, hex);
                }
            },
        )?);
        let axes: [(&str, f32, AxisFn); 3] = [
            ("x", light.position.x, axis_x),
            ("y", light.position.y, axis_y),
            ("z", light.position.z, axis_z),
        ];
        for (axis, initial, component) in axes {
            subs.push(bind_number(
                panel,
                folder,
                axis,
                initial,
                POSITION_RANGE,
                scene,
                move |s, v| {
                    if let Some(l) = s.point_light_mut(i) {
                        *component(&mut l.position) = v;
                    }
                },
            )?);
        }
    }

    for (ring, material) in materials.iter().enumerate() {
        let folder = panel.add_folder(&material.name);
        subs.push(bind_color(
            panel,
            folder,
            "color",
            &material.color.to_hex(),
            scene,
            move |s, hex| {
                if let Some(m) = s.material_mut(ring) {
                    assign_hex(&mut m.color, hex);
                }
            },
        )?);
        subs.push(bind_color(
            panel,
            folder,
            "emissive",
            &material.emissive.to_hex(),
            scene,
            move |s, hex| {
                if let Some(m) = s.material_mut(ring) {
                    assign_hex(&mut m.emissive, hex);
                }
            },
        )?);
        subs.push(bind_number(
            panel,
            folder,
            "metalness",
            material.metalness,
            UNIT_RANGE,
            scene,
            move |s, v| {
                if let Some(m) = s.material_mut(ring) {
                    m.metalness = v;
                }
            },
        )?);
        subs.push(bind_number(
            panel,
            folder,
            "roughness",
            material.roughness,
            UNIT_RANGE,
            scene,
            move |s, v| {
                if let Some(m) = s.material_mut(ring) {
                    m.roughness = v;
                }
            },
        )?);
    }

    log::info!(
        "[panel] folders={} bindings={}",
        panel.folders().len(),
        subs.len()
    );
    Ok(subs)
}
