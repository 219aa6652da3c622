use yew::prelude::*;
use shared::DisplayedMonth;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
}

pub struct UseCalendarResult {
    pub displayed: DisplayedMonth,
    pub actions: UseCalendarActions,
}

/// Month navigation owned by the calendar itself; never touches the selection.
#[hook]
pub fn use_calendar() -> UseCalendarResult {
    let displayed = use_state(DisplayedMonth::default);

    let prev_month = {
        let displayed = displayed.clone();
        use_callback(*displayed, move |_: MouseEvent, current| {
            let month = current.previous();
            Logger::debug_with_component("calendar", &format!("Showing {}", month.title()));
            displayed.set(month);
        })
    };

    let next_month = {
        let displayed = displayed.clone();
        use_callback(*displayed, move |_: MouseEvent, current| {
            let month = current.next();
            Logger::debug_with_component("calendar", &format!("Showing {}", month.title()));
            displayed.set(month);
        })
    };

    UseCalendarResult {
        displayed: *displayed,
        actions: UseCalendarActions {
            prev_month,
            next_month,
        },
    }
}
