//! Leptos component wrapping the graph canvas.
//!
//! Creates the canvas element, wires mouse/wheel handlers for node
//! dragging, panning, and zooming, and runs the simulation through a
//! `requestAnimationFrame` loop. Replacing the input data synchronously
//! cancels the previous frame request before a new engine state is built,
//! so a stale simulation never keeps ticking behind a rebuilt one; the
//! pending frame is also cancelled when the component unmounts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::render;
use super::state::GraphState;
use super::theme::Theme;
use super::types::LayoutInput;

/// Renders the interactive force-directed graph for a snapshot signal.
///
/// Every change of `data` discards the previous scene, re-resolves the
/// relationship endpoints, and restarts the simulation (carrying node
/// positions over by id). An empty node or relationship set renders a
/// blank canvas and schedules nothing.
#[component]
pub fn GraphCanvas(
	#[prop(into)] data: Signal<LayoutInput>,
	#[prop(default = 1000.0)] width: f64,
	#[prop(default = 800.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<GraphState>>> = Rc::new(RefCell::new(None));
	let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let (state_init, raf_init, animate_init) = (state.clone(), raf_id.clone(), animate.clone());
	Effect::new(move |_| {
		let input = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		// Stop the previous loop before its state goes away; an orphaned
		// callback ticking a stale simulation is the bug this prevents.
		if let Some(id) = raf_init.take() {
			let _ = window.cancel_animation_frame(id);
		}

		let theme = Theme::default();
		let prev = state_init.borrow_mut().take();
		let next = GraphState::new(&input, width, height, &theme, prev.as_ref());
		let is_empty = next.is_none();
		*state_init.borrow_mut() = next;

		if is_empty {
			render::clear(&ctx, width, height, &theme);
			return;
		}

		let (state_anim, raf_anim, animate_inner) =
			(state_init.clone(), raf_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick();
				render::render(s, &ctx, &theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(id) = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref())
				{
					raf_anim.set(Some(id));
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				raf_init.set(Some(id));
			}
		}
	});

	let raf_cleanup = leptos::__reexports::send_wrapper::SendWrapper::new(raf_id.clone());
	on_cleanup(move || {
		let raf_cleanup = &*raf_cleanup;
		if let Some(id) = raf_cleanup.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
	});

	let pointer_position = move |ev: &MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		)
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let (x, y) = pointer_position(&ev);
		if let Some(ref mut s) = *state_md.borrow_mut() {
			if !s.drag_start(x, y) {
				s.pan.active = true;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let (x, y) = pointer_position(&ev);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.active {
				s.drag_move(x, y);
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.drag_end();
			s.pan.active = false;
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.drag_end();
			s.pan.active = false;
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let (x, y) = pointer_position(&ev);
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (s.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / s.transform.k;
			s.transform.x = x - (x - s.transform.x) * ratio;
			s.transform.y = y - (y - s.transform.y) * ratio;
			s.transform.k = new_k;
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
