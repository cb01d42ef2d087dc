pub mod button;
pub mod choice_group;
pub mod input;
pub mod rating_picker;
pub mod textarea;

pub use button::Button;
pub use choice_group::ChoiceGroup;
pub use input::Input;
pub use rating_picker::RatingPicker;
pub use textarea::Textarea;
