use anchor_lang::prelude::*;

use crate::constants::{MAX_ADMIN_NOTE_LEN, MAX_WALLET_REF_LEN};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum WithdrawalStatus {
    Pending,
    Processing,
    Completed,
    Rejected,
    Cancelled,
}

/// A payout request. The full requested amount is debited from the player's
/// external balance at creation; the fee stays with the system either way.
/// Rejection does NOT refund automatically; a reversal is an explicit
/// `admin_adjust`. Cancellation of a still-Pending request does refund.
#[account]
pub struct WithdrawalRequest {
    /// Sequential id, also the PDA seed.
    pub id: u64,

    /// PDA bump.
    pub bump: u8,

    pub player: Pubkey,

    /// XTR debited from the player.
    pub amount: u64,

    /// XTR retained by the system.
    pub fee: u64,

    /// XTR actually owed to the external wallet.
    pub net: u64,

    /// Destination wallet reference (opaque bytes, length-prefixed).
    pub wallet: [u8; MAX_WALLET_REF_LEN],
    pub wallet_len: u8,

    pub status: WithdrawalStatus,

    /// Admin settlement note (opaque bytes, length-prefixed).
    pub admin_note: [u8; MAX_ADMIN_NOTE_LEN],
    pub admin_note_len: u8,

    pub created_at: i64,
    /// 0 until settled or cancelled.
    pub settled_at: i64,
}

impl WithdrawalRequest {
    pub const SEED_PREFIX: &'static [u8] = b"withdrawal";

    pub const SIZE: usize =
        8 +  // id
            1 +  // bump
            32 + // player
            8 +  // amount
            8 +  // fee
            8 +  // net
            MAX_WALLET_REF_LEN + // wallet
            1 +  // wallet_len
            1 +  // status
            MAX_ADMIN_NOTE_LEN + // admin_note
            1 +  // admin_note_len
            8 +  // created_at
            8;   // settled_at

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            WithdrawalStatus::Completed | WithdrawalStatus::Rejected | WithdrawalStatus::Cancelled
        )
    }

    pub fn set_wallet(&mut self, wallet: &[u8]) {
        self.wallet = [0; MAX_WALLET_REF_LEN];
        self.wallet[..wallet.len()].copy_from_slice(wallet);
        self.wallet_len = wallet.len() as u8;
    }

    pub fn set_admin_note(&mut self, note: &[u8]) {
        self.admin_note = [0; MAX_ADMIN_NOTE_LEN];
        self.admin_note[..note.len()].copy_from_slice(note);
        self.admin_note_len = note.len() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    fn blank_request() -> WithdrawalRequest {
        WithdrawalRequest {
            id: 0,
            bump: 0,
            player: Pubkey::default(),
            amount: 0,
            fee: 0,
            net: 0,
            wallet: [0; MAX_WALLET_REF_LEN],
            wallet_len: 0,
            status: WithdrawalStatus::Pending,
            admin_note: [0; MAX_ADMIN_NOTE_LEN],
            admin_note_len: 0,
            created_at: 0,
            settled_at: 0,
        }
    }

    #[test]
    fn withdrawal_size_matches_serialization() {
        let w = blank_request();
        let bytes = w.try_to_vec().unwrap();
        assert_eq!(bytes.len(), WithdrawalRequest::SIZE);
    }

    #[test]
    fn wallet_ref_round_trips() {
        let mut w = blank_request();
        w.set_wallet(b"UQexternal-wallet-reference");
        assert_eq!(
            &w.wallet[..w.wallet_len as usize],
            b"UQexternal-wallet-reference"
        );
    }

    #[test]
    fn terminal_states() {
        let mut w = blank_request();
        assert!(!w.is_terminal());
        w.status = WithdrawalStatus::Processing;
        assert!(!w.is_terminal());
        for s in [
            WithdrawalStatus::Completed,
            WithdrawalStatus::Rejected,
            WithdrawalStatus::Cancelled,
        ] {
            w.status = s;
            assert!(w.is_terminal());
        }
    }
}
