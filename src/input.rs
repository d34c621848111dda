// Browser input plumbing: turning mouse/touch events into plain points and
// scoping document listeners to the lifetime of a gesture.
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Element, EventTarget, MouseEvent, TouchEvent};
use yew::NodeRef;

use crate::geometry::{GlobeRect, Point};

pub fn mouse_point(e: &MouseEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}

/// First active touch, for start/move events.
pub fn touch_point(e: &TouchEvent) -> Option<Point> {
    e.touches().item(0).map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
}

/// First lifted touch, for end events where `touches` is already empty.
pub fn changed_touch_point(e: &TouchEvent) -> Option<Point> {
    e.changed_touches().item(0).map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
}

/// Current bounding box of the globe element, read at event time so layout
/// changes between gestures are always honoured.
pub fn globe_rect(globe_ref: &NodeRef) -> Option<GlobeRect> {
    globe_ref.cast::<Element>().map(|el| GlobeRect::from(&el.get_bounding_client_rect()))
}

/// An event listener that is removed again when dropped.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerGuard {
    /// Attaches `handler` to `target`. Non-passive listeners may call
    /// `prevent_default`, which touch dragging needs to stop page scrolling.
    pub fn attach<F>(target: &EventTarget, event: &'static str, passive: bool, handler: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        match target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => Some(Self { target: target.clone(), event, callback }),
            Err(e) => {
                log::warn!("could not attach {} listener: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
