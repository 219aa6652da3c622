use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookingSuccessProps {
    pub on_reset: Callback<()>,
}

#[function_component(BookingSuccess)]
pub fn booking_success(props: &BookingSuccessProps) -> Html {
    let on_click = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    html! {
        <div class="success-message">
            <h3>{"Booking Submitted Successfully!"}</h3>
            <p>{"Thank you for scheduling an appointment. We'll be in touch soon."}</p>
            <button type="button" class="btn btn-primary" onclick={on_click}>
                {"Schedule Another Appointment"}
            </button>
        </div>
    }
}
