pub mod html;

use crate::report::Report;

pub trait Reporter {
    fn report(&self, report: &Report) -> String;
}
