use serde::{Deserialize, Serialize};

/// One entry of the batch-transfer recipients file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRecipient {
    /// Recipient wallet address (base58)
    pub recipient: String,

    /// Amount in SOL; falls back to the command-line amount when omitted
    #[serde(default)]
    pub amount_sol: Option<f64>,
}
