pub mod bet_slip_dismiss;
pub mod bet_slip_place;
pub mod bet_slip_select;
pub mod history_summarize;
pub mod transfer_dispatch;
pub mod withdraw_submit;

pub use bet_slip_dismiss::*;
pub use bet_slip_place::*;
pub use bet_slip_select::*;
pub use history_summarize::*;
pub use transfer_dispatch::*;
pub use withdraw_submit::*;
