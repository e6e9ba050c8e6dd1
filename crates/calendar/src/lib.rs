//! # almanac-calendar
//!
//! Date value type for the proleptic Gregorian calendar, counted from
//! January 1 of year 0.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"Date::new()"| B["Date"]
//!     B -->|".ordinal()"| C["days since 0000-01-01"]
//!     C -->|"Date::from_ordinal()"| B
//!     B -->|".checked_add(n)"| B
//!     B -->|"date - date"| D["i64 days"]
//!     B -->|".get(Component)"| E["year / month / day"]
//!     B -->|"date_sequence()"| F["Vec of Date"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use almanac_calendar::{Component, Date};
//!
//! let d = Date::new(2016, 4, 15).unwrap();
//! assert_eq!(d.to_string(), "4/15/2016");
//! assert_eq!(format!("{d:?}"), "Date(2016,4,15)");
//!
//! // Day arithmetic rolls over months and leap years
//! assert_eq!(d.checked_add(100).unwrap(), Date::new(2016, 7, 24).unwrap());
//! assert_eq!((d - 100).unwrap(), Date::new(2016, 1, 6).unwrap());
//! assert_eq!(d - Date::new(2016, 5, 20).unwrap(), -35);
//!
//! // Field access
//! assert_eq!(d.get_many(&[Component::Year, Component::Month]), vec![2016, 4]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `gregorian` | Leap-year rule, month lengths, ordinal conversion |
//! | `date` | The `Date` value type |
//! | `component` | Field selectors |
//! | `operand` | Runtime-typed comparison and arithmetic |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod component;
mod date;
mod error;
mod gregorian;
mod operand;
mod sequence;

pub use component::Component;
pub use date::Date;
pub use error::CalendarError;
pub use gregorian::{days_in_month, days_in_year, is_leap_year};
pub use operand::Difference;
pub use sequence::date_sequence;
