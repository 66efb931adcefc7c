use anchor_lang::prelude::*;

use crate::constants::UNLIMITED_STOCK;
use crate::errors::GoldenCobraError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ItemRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Currency {
    Stars,
    Xtr,
}

/// Catalog entry for a cosmetic NFT. Priced in both currencies; a price of 0
/// disables purchase in that currency.
#[account]
pub struct ShopItem {
    pub item_id: u64,
    pub bump: u8,

    pub price_stars: u64,
    pub price_xtr: u64,

    pub rarity: ItemRarity,

    /// Remaining stock; -1 = unlimited. Never drops below 0.
    pub stock: i64,

    /// 0 = delisted.
    pub active: u8,

    pub total_sold: u32,
    pub created_at: i64,
}

impl ShopItem {
    pub const SEED_PREFIX: &'static [u8] = b"item";

    pub const SIZE: usize =
        8 +  // item_id
            1 +  // bump
            8 +  // price_stars
            8 +  // price_xtr
            1 +  // rarity
            8 +  // stock
            1 +  // active
            4 +  // total_sold
            8;   // created_at

    pub fn price_in(&self, currency: Currency) -> u64 {
        match currency {
            Currency::Stars => self.price_stars,
            Currency::Xtr => self.price_xtr,
        }
    }

    /// Decrement stock together with the sale counter. Called in the same
    /// instruction that creates the ownership record, so the two can never
    /// diverge.
    pub fn take_one(&mut self) -> Result<()> {
        require!(self.active != 0, GoldenCobraError::ItemInactive);
        if self.stock != UNLIMITED_STOCK {
            require!(self.stock > 0, GoldenCobraError::OutOfStock);
            self.stock -= 1;
        }
        self.total_sold = self
            .total_sold
            .checked_add(1)
            .ok_or(GoldenCobraError::MathOverflow)?;
        Ok(())
    }
}

/// Per-player ownership record. The PDA seed ["ownership", item_id, owner]
/// is the uniqueness constraint: a second purchase of the same item fails at
/// account init.
#[account]
pub struct ItemOwnership {
    pub item_id: u64,
    pub bump: u8,
    pub owner: Pubkey,
    pub paid_with: Currency,
    pub price_paid: u64,
    pub purchased_at: i64,
}

impl ItemOwnership {
    pub const SEED_PREFIX: &'static [u8] = b"ownership";

    pub const SIZE: usize =
        8 +  // item_id
            1 +  // bump
            32 + // owner
            1 +  // paid_with
            8 +  // price_paid
            8;   // purchased_at
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    fn item(stock: i64) -> ShopItem {
        ShopItem {
            item_id: 1,
            bump: 0,
            price_stars: 500,
            price_xtr: 5,
            rarity: ItemRarity::Rare,
            stock,
            active: 1,
            total_sold: 0,
            created_at: 0,
        }
    }

    #[test]
    fn shop_item_size_matches_serialization() {
        let bytes = item(3).try_to_vec().unwrap();
        assert_eq!(bytes.len(), ShopItem::SIZE);
    }

    #[test]
    fn ownership_size_matches_serialization() {
        let o = ItemOwnership {
            item_id: 1,
            bump: 0,
            owner: Pubkey::default(),
            paid_with: Currency::Stars,
            price_paid: 500,
            purchased_at: 0,
        };
        let bytes = o.try_to_vec().unwrap();
        assert_eq!(bytes.len(), ItemOwnership::SIZE);
    }

    #[test]
    fn stock_never_goes_negative() {
        let mut i = item(1);
        i.take_one().unwrap();
        assert_eq!(i.stock, 0);
        assert!(i.take_one().is_err());
        assert_eq!(i.stock, 0);
    }

    #[test]
    fn unlimited_stock_stays_unlimited() {
        let mut i = item(UNLIMITED_STOCK);
        for _ in 0..100 {
            i.take_one().unwrap();
        }
        assert_eq!(i.stock, UNLIMITED_STOCK);
        assert_eq!(i.total_sold, 100);
    }

    #[test]
    fn delisted_item_cannot_sell() {
        let mut i = item(5);
        i.active = 0;
        assert!(i.take_one().is_err());
    }
}
