//! Window stack, placement, and geometry helpers used by the desktop reducer.

use desktop_app_contract::WindowSize;

use crate::{
    model::{DesktopState, ResizeEdge, WindowId, WindowRect},
    reducer::DesktopError,
};

/// Global minimum window width for apps without a registry minimum.
pub const MIN_WINDOW_WIDTH: i32 = 220;
/// Global minimum window height for apps without a registry minimum.
pub const MIN_WINDOW_HEIGHT: i32 = 140;
/// Distance between successive cascade positions.
pub const CASCADE_STEP: i32 = 24;
/// Number of cascade positions before wrapping back to the origin.
pub const CASCADE_SLOTS: i32 = 8;

const CASCADE_ORIGIN_X: i32 = 72;
const CASCADE_ORIGIN_Y: i32 = 40;

/// Top edge of the desktop area; the taskbar sits at the bottom.
pub const DESKTOP_TOP_PX: i32 = 0;

/// Keeps the titlebar, and with it the drag handle, below the top of the desktop.
pub fn keep_titlebar_reachable(rect: WindowRect) -> WindowRect {
    WindowRect {
        y: rect.y.max(DESKTOP_TOP_PX),
        ..rect
    }
}

/// Places a new window of `size` on the cascade for `window_id`, kept inside `viewport` when it fits.
pub fn cascade_rect(
    window_id: WindowId,
    size: WindowSize,
    min: WindowSize,
    viewport: WindowRect,
) -> WindowRect {
    let slot = ((window_id.0.saturating_sub(1)) % CASCADE_SLOTS as u64) as i32;
    let offset = slot * CASCADE_STEP;
    let w = size.width.min(viewport.w).max(min.width);
    let h = size.height.min(viewport.h).max(min.height);
    let max_x = (viewport.x + viewport.w - w).max(viewport.x);
    let max_y = (viewport.y + viewport.h - h).max(viewport.y);

    WindowRect {
        x: (viewport.x + CASCADE_ORIGIN_X + offset).min(max_x),
        y: (viewport.y + CASCADE_ORIGIN_Y + offset).min(max_y),
        w,
        h,
    }
}

/// Raises `window_id` to the top of the stack and focuses it, un-minimizing if needed.
///
/// # Errors
///
/// Returns [`DesktopError::WindowNotFound`] when the id is stale.
pub fn focus_window_internal(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<(), DesktopError> {
    let index = state
        .windows
        .iter()
        .position(|w| w.id == window_id)
        .ok_or(DesktopError::WindowNotFound(window_id))?;
    let already_focused_top = index + 1 == state.windows.len()
        && state.windows[index].is_focused
        && !state.windows[index].minimized;
    if already_focused_top {
        return Ok(());
    }

    for window in &mut state.windows {
        window.is_focused = false;
    }
    let mut window = state.windows.remove(index);
    window.is_focused = true;
    window.minimized = false;
    state.windows.push(window);
    normalize_window_stack(state);
    Ok(())
}

/// Re-establishes stack invariants: `z_index == position + 1`, at most one focused window, no
/// focused minimized window, and `minimized_order` holding exactly the minimized ids.
pub fn normalize_window_stack(state: &mut DesktopState) {
    let mut has_focused = false;
    for (idx, window) in state.windows.iter_mut().enumerate() {
        window.z_index = (idx + 1) as u32;
        if window.minimized {
            window.is_focused = false;
        }
        if window.is_focused {
            if has_focused {
                window.is_focused = false;
            } else {
                has_focused = true;
            }
        }
    }

    if !has_focused {
        if let Some(top) = state.windows.iter_mut().rev().find(|w| !w.minimized) {
            top.is_focused = true;
        }
    }

    let windows = &state.windows;
    state.minimized_order.retain(|window_id| {
        windows
            .iter()
            .any(|w| w.id == *window_id && w.minimized)
    });
    for window in windows {
        if window.minimized && !state.minimized_order.contains(&window.id) {
            state.minimized_order.push(window.id);
        }
    }
}

/// Applies a pointer delta to `start` for the dragged edge, never shrinking below `min`.
///
/// Left and top edges keep the opposite edge anchored when the minimum is hit.
pub fn resize_rect(
    start: WindowRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    min: WindowSize,
) -> WindowRect {
    let mut rect = start;

    if edge.moves_left_edge() {
        let dx = dx.min(start.w - min.width);
        rect.x = start.x + dx;
        rect.w = start.w - dx;
    } else if matches!(
        edge,
        ResizeEdge::East | ResizeEdge::NorthEast | ResizeEdge::SouthEast
    ) {
        rect.w = start.w + dx;
    }

    if edge.moves_top_edge() {
        let dy = dy.min(start.h - min.height);
        rect.y = start.y + dy;
        rect.h = start.h - dy;
    } else if matches!(
        edge,
        ResizeEdge::South | ResizeEdge::SouthEast | ResizeEdge::SouthWest
    ) {
        rect.h = start.h + dy;
    }

    rect.clamped_min(min)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1280,
        h: 760,
    };
    const FLOOR: WindowSize = WindowSize::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);

    #[test]
    fn cascade_steps_then_wraps() {
        let size = WindowSize::new(400, 300);
        let first = cascade_rect(WindowId(1), size, FLOOR, VIEWPORT);
        let second = cascade_rect(WindowId(2), size, FLOOR, VIEWPORT);
        let ninth = cascade_rect(WindowId(9), size, FLOOR, VIEWPORT);

        assert_eq!((second.x - first.x, second.y - first.y), (CASCADE_STEP, CASCADE_STEP));
        assert_eq!(ninth, first);
    }

    #[test]
    fn cascade_shrinks_to_small_viewports_but_not_below_min() {
        let phone = WindowRect {
            x: 0,
            y: 0,
            w: 360,
            h: 500,
        };
        let rect = cascade_rect(
            WindowId(3),
            WindowSize::new(600, 600),
            WindowSize::new(320, 400),
            phone,
        );

        assert_eq!((rect.w, rect.h), (360, 500));
        assert_eq!((rect.x, rect.y), (0, 0));
    }

    #[test]
    fn west_resize_keeps_right_edge_when_clamped() {
        let start = WindowRect {
            x: 100,
            y: 100,
            w: 300,
            h: 300,
        };
        let rect = resize_rect(start, ResizeEdge::West, 200, 0, FLOOR);

        assert_eq!(rect.w, MIN_WINDOW_WIDTH);
        assert_eq!(rect.x + rect.w, start.x + start.w);
    }

    #[test]
    fn south_east_resize_grows_both_axes() {
        let start = WindowRect {
            x: 10,
            y: 10,
            w: 300,
            h: 200,
        };
        let rect = resize_rect(start, ResizeEdge::SouthEast, 40, 25, FLOOR);

        assert_eq!(
            rect,
            WindowRect {
                x: 10,
                y: 10,
                w: 340,
                h: 225
            }
        );
    }
}
