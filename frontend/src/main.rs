use yew::prelude::*;
use shared::SchedulerConfig;

mod components;
mod hooks;
mod services;

use components::forms::booking_form::BookingFormProps;
use components::{BookingForm, BookingSuccess, Calendar, TimeSlotPicker};
use hooks::use_booking_flow::{use_booking_flow, UseBookingFlowResult};
use services::config::load_config;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SchedulerConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let UseBookingFlowResult { state, actions } = use_booking_flow(&props.config);

    html! {
        <div class="scheduler-container">
            <h1>{"Schedule an Appointment"}</h1>
            <div class="scheduler-content">
                <section class="calendar-section">
                    <h2>{"Select Date"}</h2>
                    <Calendar
                        selected_date={state.selected_date()}
                        on_date_select={actions.select_date.clone()}
                    />
                    {if let Some(date) = state.selected_date_display() {
                        html! { <p class="selection-summary">{format!("Selected date: {}", date)}</p> }
                    } else { html! {} }}
                </section>

                <section class="time-section">
                    <h2>{"Select Time"}</h2>
                    {if state.selected_date().is_some() {
                        html! {
                            <TimeSlotPicker
                                slots={state.slots().to_vec()}
                                selected_time={state.selected_time()}
                                on_time_select={actions.select_time.clone()}
                            />
                        }
                    } else {
                        html! { <p class="placeholder">{"Please select a date first"}</p> }
                    }}
                    {if let Some(time) = state.selected_time_display() {
                        html! { <p class="selection-summary">{format!("Selected time: {}", time)}</p> }
                    } else { html! {} }}
                </section>

                <section class="booking-section">
                    <h2>{"Booking Details"}</h2>
                    {if state.is_submitted() {
                        html! { <BookingSuccess on_reset={actions.reset.clone()} /> }
                    } else {
                        let form = BookingFormProps::from_flow(&state, actions.submit.clone());
                        html! { <BookingForm ..form /> }
                    }}
                </section>
            </div>
        </div>
    }
}

fn main() {
    Logger::init(log::LevelFilter::Info);

    let config = load_config();
    log::set_max_level(config.log_level());

    log::info!(
        "Starting appointment scheduler: {} to {} every {} minutes",
        config.day_start,
        config.day_end,
        config.slot_interval_minutes
    );
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
