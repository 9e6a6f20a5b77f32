use crate::domain::customer::Customer;
use crate::search::{MonthNames, SearchTerm, Searchable};

impl Searchable for Customer {
    fn matches_term(&self, term: &SearchTerm, _months: &dyn MonthNames) -> bool {
        term.prefix_of(&self.first_name)
            || term.within(&self.last_name)
            || term.prefix_of(&self.tax_id)
            || term.prefix_of(self.street_type())
            || term.within(self.street_name())
            || term.prefix_of(self.locality_name())
            || term.prefix_of(self.postal_code())
            || term.prefix_of(self.phone())
            || term.prefix_of(self.email())
    }
}
