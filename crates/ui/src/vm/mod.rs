mod quiz_vm;

pub use quiz_vm::{option_class, option_element_id, options_class, phase_label, start_button_id};
