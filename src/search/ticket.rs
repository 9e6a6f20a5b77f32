use crate::domain::ticket::{Ticket, TicketLine};
use crate::search::{MonthNames, SearchTerm, Searchable};

impl Searchable for TicketLine {
    fn matches_term(&self, term: &SearchTerm, _months: &dyn MonthNames) -> bool {
        term.prefix_of(self.work_name()) || term.prefix_of(self.product_name())
    }
}

impl Searchable for Ticket {
    /// Last name is the only name field matched anywhere in the text; the
    /// rendered date forms are also matched anywhere. Everything else is
    /// matched by prefix.
    fn matches_term(&self, term: &SearchTerm, months: &dyn MonthNames) -> bool {
        term.prefix_of(self.created_at.as_str())
            || term.prefix_of(&self.number.to_string())
            || term.prefix_of(self.customer_tax_id())
            || term.prefix_of(self.customer_first_name())
            || term.within(self.customer_last_name())
            || self
                .due_date
                .as_ref()
                .is_some_and(|due| term.prefix_of(due.as_str()))
            || term.prefix_of(self.stage_name())
            || self.lines.iter().any(|line| line.matches_term(term, months))
            || self
                .due_date
                .as_ref()
                .is_some_and(|due| term.within_date(due, months))
            || term.within_date(&self.created_at, months)
    }
}
