//! Presentational building blocks. None of them read shared state; everything comes in
//! through props and leaves through event handlers.

mod alert;
mod button;
mod card;
mod input;
mod modal;
mod spinner;
mod table;
mod textarea;

pub use alert::Alert;
pub use button::{Button, ButtonSize, ButtonStyle, ButtonVariant};
pub use card::{Card, CardPadding, CardRadius, CardShadow, card_class};
pub use input::{Input, InputType};
pub use modal::{Modal, ModalSize};
pub use spinner::{Spinner, SpinnerColor, SpinnerSize, SpinnerStyle, spinner_class};
pub use table::{RowAction, Table, table_class};
pub use textarea::{Textarea, char_counter};
