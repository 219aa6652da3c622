use chrono::NaiveDate;
use yew::prelude::*;
use shared::{CalendarCell, WEEKDAY_LABELS};
use crate::hooks::use_calendar::use_calendar;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    /// Currently chosen date, or None before the first click
    pub selected_date: Option<NaiveDate>,
    /// Fired for every day cell, including padding days of adjacent months
    pub on_date_select: Callback<NaiveDate>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let calendar = use_calendar();
    let displayed = calendar.displayed;

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <span class="month-year">{displayed.title()}</span>
                <div class="calendar-nav">
                    <button type="button" class="nav-button" onclick={calendar.actions.prev_month.clone()}>
                        {"Previous"}
                    </button>
                    <button type="button" class="nav-button" onclick={calendar.actions.next_month.clone()}>
                        {"Next"}
                    </button>
                </div>
            </div>

            <div class="calendar-grid">
                {for WEEKDAY_LABELS.iter().map(|label| html! {
                    <div class="weekday">{*label}</div>
                })}

                {for displayed.grid().into_iter().map(|cell| {
                    let on_date_select = props.on_date_select.clone();
                    let date = cell.date;
                    html! {
                        <button
                            type="button"
                            key={date.to_string()}
                            class={day_classes(&cell, props.selected_date)}
                            onclick={Callback::from(move |_: MouseEvent| on_date_select.emit(date))}
                        >
                            {cell.day()}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

fn day_classes(cell: &CalendarCell, selected: Option<NaiveDate>) -> Classes {
    classes!(
        "calendar-day",
        (!cell.in_displayed_month).then_some("other-month"),
        cell.is_selected(selected).then_some("selected")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::DisplayedMonth;

    #[test]
    fn test_day_classes() {
        let march = DisplayedMonth::new(2024, 3).unwrap();
        let grid = march.grid();
        let picked = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        let padding = day_classes(&grid[0], None);
        assert!(padding.contains("calendar-day"));
        assert!(padding.contains("other-month"));
        assert!(!padding.contains("selected"));

        let fifteenth = grid.iter().find(|cell| cell.date == picked).unwrap();
        assert!(day_classes(fifteenth, Some(picked)).contains("selected"));
        assert!(!day_classes(fifteenth, None).contains("selected"));
        assert!(!day_classes(fifteenth, None).contains("other-month"));
    }
}
