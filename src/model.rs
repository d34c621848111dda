// View-state store for the snow globe builder.
// Every mutation goes through `GlobeAction` so handlers never hold state of
// their own; delayed effects are driven by `GlobeAction::Tick`.
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::catalog::{BackgroundId, DecorationKind, Theme};
use crate::config::Tuning;
use crate::geometry::{self, GlobeRect, PLACEMENT_BAND, Percent, Point, REPOSITION_BAND};
use crate::particles::{self, Snowflake, Star};
use crate::state::{
    DragMode, DragRelease, DragSource, DragUpdate, GestureTracker, PointerKind, ShakeEffect,
    ShakeMachine,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompositionId(pub u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Landing,
    Builder,
    Gallery,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub id: ObjectId,
    pub kind: DecorationKind,
    /// Percent of the globe box, see [`geometry::Percent`].
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl PlacedObject {
    pub fn position(&self) -> Percent {
        Percent::new(self.x, self.y)
    }
}

/// A saved globe. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub id: CompositionId,
    pub name: String,
    pub background: BackgroundId,
    pub objects: Vec<PlacedObject>,
    /// Milliseconds since the Unix epoch.
    pub created_at_ms: f64,
}

pub const SCALE_MIN: f64 = 0.8;
pub const SCALE_MAX: f64 = 1.2;

fn random_scale<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(SCALE_MIN..=SCALE_MAX)
}

/// Moves every object to a fresh random spot and size, as a shaken globe does.
pub fn scatter<R: Rng + ?Sized>(objects: &mut [PlacedObject], rng: &mut R) {
    for o in objects.iter_mut() {
        o.x = rng.gen_range(PLACEMENT_BAND.min..=PLACEMENT_BAND.max);
        o.y = rng.gen_range(PLACEMENT_BAND.min..=PLACEMENT_BAND.max);
        o.scale = random_scale(rng);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlobeState {
    pub tuning: Tuning,
    pub page: Page,
    pub theme: Theme,
    pub background: BackgroundId,
    pub objects: Vec<PlacedObject>,
    pub saved: Vec<Composition>,
    pub gestures: GestureTracker,
    pub shake: ShakeMachine,
    pub globe_snow: Vec<Snowflake>,
    pub background_snow: Vec<Snowflake>,
    pub stars: Vec<Star>,
    /// Remaining visibility of the "saved" toast.
    pub save_notice_ms: Option<f64>,
    pub menu_open: bool,
    next_id: u64,
}

impl GlobeState {
    pub fn new(tuning: Tuning) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            page: Page::default(),
            theme: Theme::default(),
            background: tuning.initial_background(),
            objects: Vec::new(),
            saved: Vec::new(),
            gestures: GestureTracker::new(tuning.click_guard_ms),
            shake: ShakeMachine::new(&tuning),
            globe_snow: Vec::new(),
            background_snow: particles::background_snow(&mut rng),
            stars: particles::background_stars(&mut rng),
            save_notice_ms: None,
            menu_open: false,
            next_id: 1,
            tuning,
        }
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_active()
    }

    pub fn is_whiteout(&self) -> bool {
        self.shake.is_whiteout()
    }

    fn issue_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn object(&self, id: ObjectId) -> Option<&PlacedObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Creates `kind` at `point` if the point is inside the globe. Returns the
    /// new id, or `None` when the drop was rejected.
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        kind: DecorationKind,
        point: Point,
        rect: &GlobeRect,
        rng: &mut R,
    ) -> Option<ObjectId> {
        if !geometry::is_inside_globe(point, rect, self.tuning.drop_margin_px) {
            return None;
        }
        let pos = geometry::to_percent(point, rect, PLACEMENT_BAND);
        debug_assert!(PLACEMENT_BAND.contains(pos));
        let id = ObjectId(self.issue_id());
        self.objects.push(PlacedObject { id, kind, x: pos.x, y: pos.y, scale: random_scale(rng) });
        Some(id)
    }

    fn move_object(&mut self, id: ObjectId, grab_offset: Percent, point: Point, rect: &GlobeRect) {
        let raw = rect.percent_of(point);
        if let Some(o) = self.objects.iter_mut().find(|o| o.id == id) {
            o.x = REPOSITION_BAND.clamp(raw.x - grab_offset.x);
            o.y = REPOSITION_BAND.clamp(raw.y - grab_offset.y);
        }
    }

    /// Snapshots the live globe. Does nothing for an empty globe.
    pub fn save(&mut self, now_ms: f64) -> Option<CompositionId> {
        if self.objects.is_empty() {
            return None;
        }
        let id = CompositionId(self.issue_id());
        let name = format!("Globe {}", self.saved.len() + 1);
        self.saved.push(Composition {
            id,
            name,
            background: self.background,
            objects: self.objects.clone(),
            created_at_ms: now_ms,
        });
        self.save_notice_ms = Some(self.tuning.save_notice_ms);
        Some(id)
    }

    /// Replaces the live globe with a saved one and opens the builder.
    pub fn load(&mut self, id: CompositionId) -> bool {
        let Some(c) = self.saved.iter().find(|c| c.id == id) else {
            return false;
        };
        self.background = c.background;
        self.objects = c.objects.clone();
        self.gestures.cancel();
        self.page = Page::Builder;
        true
    }

    pub fn clear(&mut self) {
        self.objects.clear();
        self.globe_snow.clear();
    }

    /// Starts the shake sequence unless one is already running.
    pub fn start_shake<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.shake.trigger() {
            return false;
        }
        self.gestures.cancel();
        self.globe_snow = particles::globe_snow(rng);
        true
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, dt_ms: f64, now_ms: f64, rng: &mut R) {
        for effect in self.shake.advance(dt_ms) {
            match effect {
                ShakeEffect::WhiteoutStarted => scatter(&mut self.objects, rng),
                ShakeEffect::WhiteoutEnded => {}
                ShakeEffect::Settled => log::debug!("shake settled"),
                ShakeEffect::SnowExpired => self.globe_snow.clear(),
            }
        }
        self.gestures.advance(dt_ms);
        if let Some(left) = self.save_notice_ms {
            let left = left - dt_ms;
            self.save_notice_ms = if left > 0.0 { Some(left) } else { None };
        }
        particles::fall_globe_snow(&mut self.globe_snow, dt_ms);
        particles::drift_background_snow(&mut self.background_snow, dt_ms);
        particles::twinkle(&mut self.stars, now_ms);
    }
}

#[derive(Clone, Debug)]
pub enum GlobeAction {
    Navigate(Page),
    ToggleTheme,
    SelectBackground(BackgroundId),
    ToggleMenu,
    CloseMenu,
    /// A gesture starts on a palette tile or a placed object. For objects the
    /// globe rect is needed to measure the grab offset.
    BeginDrag { source: DragTarget, origin: Point, rect: Option<GlobeRect>, input: PointerKind },
    UpdateDrag { point: Point, rect: Option<GlobeRect> },
    EndDrag { point: Option<Point>, rect: Option<GlobeRect> },
    /// A native drag ended somewhere other than the globe.
    CancelPlacement,
    /// The system took the gesture away (touchcancel). Nothing is placed or
    /// removed.
    CancelDrag,
    ClickObject(ObjectId),
    Shake,
    Save { now_ms: f64 },
    Load(CompositionId),
    Clear,
    /// One beat of the animation clock.
    Tick { dt_ms: f64, now_ms: f64 },
}

/// What the pointer landed on when a gesture began.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragTarget {
    Palette(DecorationKind),
    Object(ObjectId),
}

impl Reducible for GlobeState {
    type Action = GlobeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GlobeAction::*;
        let mut rng = rand::thread_rng();
        let mut new = (*self).clone();
        match action {
            Navigate(page) => {
                if new.page == page && !new.menu_open {
                    return self;
                }
                new.page = page;
                new.menu_open = false;
            }
            ToggleTheme => new.theme = new.theme.toggled(),
            SelectBackground(bg) => {
                if new.background == bg {
                    return self;
                }
                new.background = bg;
            }
            ToggleMenu => new.menu_open = !new.menu_open,
            CloseMenu => {
                if !new.menu_open {
                    return self;
                }
                new.menu_open = false;
            }
            BeginDrag { source, origin, rect, input } => {
                if new.is_shaking() {
                    return self;
                }
                let source = match source {
                    DragTarget::Palette(kind) => DragSource::Palette(kind),
                    DragTarget::Object(id) => {
                        let Some(obj) = new.object(id) else { return self };
                        let grab_offset = match rect {
                            Some(r) => {
                                let at = r.percent_of(origin);
                                Percent::new(at.x - obj.x, at.y - obj.y)
                            }
                            None => Percent::default(),
                        };
                        DragSource::Object { id, grab_offset }
                    }
                };
                new.gestures.begin_drag(source, origin, input);
            }
            UpdateDrag { point, rect } => {
                if new.is_shaking() {
                    return self;
                }
                match new.gestures.update_drag(point) {
                    DragUpdate::Ignored => return self,
                    DragUpdate::Tracked => {}
                    DragUpdate::Move { id, grab_offset, point } => {
                        if let Some(r) = rect {
                            new.move_object(id, grab_offset, point, &r);
                        }
                    }
                }
            }
            EndDrag { point, rect } => match new.gestures.end_drag(point) {
                DragRelease::Ignored => return self,
                DragRelease::Drop { kind, point } => {
                    if new.is_shaking() {
                        return Rc::new(new);
                    }
                    match (point, rect) {
                        (Some(p), Some(r)) => match new.place(kind, p, &r, &mut rng) {
                            Some(id) => log::debug!("placed {} as {:?}", kind.key(), id),
                            None => log::debug!("drop of {} outside globe ignored", kind.key()),
                        },
                        _ => log::debug!("drop of {} without a position ignored", kind.key()),
                    }
                }
                DragRelease::Released { id, moved: false, input: PointerKind::Touch } => {
                    new.objects.retain(|o| o.id != id);
                    log::debug!("tap removed {:?}", id);
                }
                DragRelease::Released { id, moved, .. } => {
                    log::debug!("released {:?} (moved: {})", id, moved);
                }
            },
            CancelPlacement => {
                if !new.gestures.is_placing() {
                    return self;
                }
                new.gestures.cancel_placement();
            }
            CancelDrag => {
                if new.gestures.mode() == DragMode::Idle {
                    return self;
                }
                new.gestures.cancel();
                log::debug!("gesture cancelled");
            }
            ClickObject(id) => {
                if new.is_shaking() || !new.gestures.allows_click_removal() {
                    return self;
                }
                let before = new.objects.len();
                new.objects.retain(|o| o.id != id);
                if new.objects.len() == before {
                    return self;
                }
            }
            Shake => {
                if !new.start_shake(&mut rng) {
                    log::debug!("shake ignored, already shaking");
                    return self;
                }
                log::info!("shake with {} objects", new.objects.len());
            }
            Save { now_ms } => match new.save(now_ms) {
                Some(id) => log::info!("saved {:?} with {} objects", id, new.objects.len()),
                None => return self,
            },
            Load(id) => {
                if !new.load(id) {
                    log::warn!("load of unknown composition {:?}", id);
                    return self;
                }
                log::info!("loaded {:?}", id);
            }
            Clear => {
                if new.objects.is_empty() && new.globe_snow.is_empty() {
                    return self;
                }
                new.clear();
                log::info!("globe cleared");
            }
            Tick { dt_ms, now_ms } => new.tick(dt_ms, now_ms, &mut rng),
        }
        Rc::new(new)
    }
}
