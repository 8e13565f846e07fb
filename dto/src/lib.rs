pub mod contact_message;
pub mod member;
pub mod member_form;
pub mod member_hours;
pub mod member_to_look_up;
pub mod modality;
pub mod training;
pub mod training_form;
