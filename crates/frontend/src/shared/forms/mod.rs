//! Forms generated from declarative field lists.

pub mod auto_form;
pub mod field;
pub mod schema;
pub mod searchable_select;
pub mod state;
pub mod value;

pub use auto_form::AutoForm;
pub use field::{FieldConfig, FieldKind, SelectOption, ShowWhen, Validator};
pub use schema::{validate, FormErrors};
pub use searchable_select::SearchableSelect;
pub use state::FormState;
pub use value::{FormValue, FormValues};
