use yew::prelude::*;
use shared::{SlotTime, TimeSlot};

#[derive(Properties, PartialEq)]
pub struct TimeSlotPickerProps {
    pub slots: Vec<TimeSlot>,
    pub selected_time: Option<SlotTime>,
    pub on_time_select: Callback<SlotTime>,
}

#[function_component(TimeSlotPicker)]
pub fn time_slot_picker(props: &TimeSlotPickerProps) -> Html {
    html! {
        <div class="time-slot-picker-grid">
            {for props.slots.iter().map(|slot| {
                let on_time_select = props.on_time_select.clone();
                let value = slot.value;
                html! {
                    <button
                        type="button"
                        key={value.value()}
                        class={slot_classes(slot, props.selected_time)}
                        onclick={Callback::from(move |_: MouseEvent| on_time_select.emit(value))}
                    >
                        {&slot.label}
                    </button>
                }
            })}
        </div>
    }
}

fn slot_classes(slot: &TimeSlot, selected: Option<SlotTime>) -> Classes {
    classes!(
        "time-slot-button",
        (selected == Some(slot.value)).then_some("selected")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SlotSchedule;

    #[test]
    fn test_only_matching_slot_is_highlighted() {
        let slots: Vec<TimeSlot> = SlotSchedule::default().collect();
        let picked: SlotTime = "14:30".parse().unwrap();

        let highlighted: Vec<&TimeSlot> = slots
            .iter()
            .filter(|slot| slot_classes(slot, Some(picked)).contains("selected"))
            .collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].label, "2:30 PM");

        assert!(slots.iter().all(|slot| !slot_classes(slot, None).contains("selected")));
    }
}
