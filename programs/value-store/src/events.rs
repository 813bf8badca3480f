use anchor_lang::prelude::*;

#[event]
pub struct ValueChanged {
    pub value_store: Pubkey,
    pub updated_by: Pubkey,
    pub old_value: u64,
    pub new_value: u64,
}
