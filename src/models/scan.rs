use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanSummary {
    pub assets_scanned: usize,
    pub notifications_sent: u32,
    pub delivery_failures: u32,
}
