/// Cost components of a quote, each independently rounded to whole rupees.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub fuel: i64,
    pub toll: i64,
    pub state_tax: i64,
    pub driver_charge: i64,
    pub labour_charge: i64,
    pub other_expenses: i64,
}

/// A complete bhada quote. Built fresh per request, returned, discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub final_bhada_quote: i64,
    pub base_freight_income: i64,
    pub total_operating_cost: i64,
    pub cost_breakdown: CostBreakdown,
}
