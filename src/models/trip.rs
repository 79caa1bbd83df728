/// Trip facts the quote assembler needs beyond the resolved route.
#[derive(Debug, Clone)]
pub struct TripInfo {
    pub destination_state: Option<String>,
    pub material_type: String,
    pub load_weight_tons: f64,
    pub state_changes: u32,
}
