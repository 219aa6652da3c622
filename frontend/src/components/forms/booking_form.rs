use chrono::NaiveDate;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use shared::{format_date_long, BookingDraft, BookingField, BookingFlow, BookingFormState, SlotTime};

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    // Selection from the parent
    pub selected_date: Option<NaiveDate>,
    pub selected_time: Option<SlotTime>,
    // Submit stays disabled until the flow has both
    pub can_submit: bool,

    // Receives the validated draft; the parent adds date and time
    pub on_submit: Callback<BookingDraft>,
}

impl BookingFormProps {
    pub fn from_flow(flow: &BookingFlow, on_submit: Callback<BookingDraft>) -> Self {
        Self {
            selected_date: flow.selected_date(),
            selected_time: flow.selected_time(),
            can_submit: flow.can_submit(),
            on_submit,
        }
    }
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let form = use_state(BookingFormState::default);

    let on_input = |field: BookingField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.update(field, input_value(&e));
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut next = (*form).clone();
            let validated = next.submit();
            form.set(next);

            if let Some(draft) = validated {
                on_submit.emit(draft);
            }
        })
    };

    html! {
        <form class="booking-form" onsubmit={onsubmit} novalidate={true}>
            <div class="appointment-summary">
                <h4>{"Selected Appointment:"}</h4>
                <p>{format!("Date: {}", summary_text(props.selected_date.map(format_date_long)))}</p>
                <p>{format!("Time: {}", summary_text(props.selected_time.map(|t| t.display_12h())))}</p>
            </div>

            {for BookingField::ALL.iter().map(|field| {
                render_field(*field, &form, on_input(*field))
            })}

            <button
                type="submit"
                class="btn btn-primary book-btn"
                disabled={!props.can_submit}
            >
                {"Book Appointment"}
            </button>
        </form>
    }
}

fn render_field(field: BookingField, form: &BookingFormState, oninput: Callback<InputEvent>) -> Html {
    let value = form.draft.get(field).to_string();
    let error = form.error(field);
    let group_class = classes!("form-group", error.is_some().then_some("has-error"));

    html! {
        <div class={group_class}>
            <label for={field.key()}>{field.label()}{" *"}</label>
            {match field {
                BookingField::Goals => html! {
                    <textarea id={field.key()} name={field.key()} rows="4" value={value} {oninput} />
                },
                BookingField::Email => html! {
                    <input type="email" id={field.key()} name={field.key()} value={value} {oninput} />
                },
                _ => html! {
                    <input type="text" id={field.key()} name={field.key()} value={value} {oninput} />
                },
            }}
            {if let Some(message) = error {
                html! { <div class="field-error">{message}</div> }
            } else { html! {} }}
        </div>
    }
}

fn input_value(e: &InputEvent) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn summary_text(value: Option<String>) -> String {
    value.unwrap_or_else(|| "Not selected".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_text() {
        assert_eq!(summary_text(None), "Not selected");
        assert_eq!(summary_text(Some("2:30 PM".to_string())), "2:30 PM");

        let date = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(summary_text(date.map(format_date_long)), "March 15, 2024");
    }

    #[test]
    fn test_submit_gate_follows_flow_in_either_order() {
        let on_submit = Callback::from(|_: BookingDraft| ());
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let time: SlotTime = "14:30".parse().unwrap();

        let mut flow = BookingFlow::default();
        assert!(!BookingFormProps::from_flow(&flow, on_submit.clone()).can_submit);

        flow.select_time(time);
        let props = BookingFormProps::from_flow(&flow, on_submit.clone());
        assert_eq!(props.selected_time, Some(time));
        assert!(!props.can_submit);

        flow.select_date(date);
        let props = BookingFormProps::from_flow(&flow, on_submit.clone());
        assert_eq!(props.selected_date, Some(date));
        assert!(props.can_submit);

        flow.reset();
        assert!(!BookingFormProps::from_flow(&flow, on_submit).can_submit);
    }
}
