use anchor_lang::prelude::*;
use crate::events::ValueChanged;
use crate::state::*;

#[derive(Accounts)]
pub struct ValueStoreSet<'info> {
    #[account(mut,
        seeds = [VALUE_STORE_SEED, value_store.owner.as_ref()],
        bump = value_store.bump_seed)]
    pub value_store: Account<'info, ValueStore>,

    pub signer: Signer<'info>,
}

/// Any signer may write
pub fn handle_set_value(ctx: Context<ValueStoreSet>, new_value: u64) -> Result<()> {
    let value_store = &mut ctx.accounts.value_store;
    let old_value = value_store.set(new_value)?;

    emit!(ValueChanged {
        value_store: value_store.key(),
        updated_by: ctx.accounts.signer.key(),
        old_value,
        new_value,
    });
    Ok(())
}

pub fn handle_set_value_owner_only(ctx: Context<ValueStoreSet>, new_value: u64) -> Result<()> {
    let value_store = &mut ctx.accounts.value_store;
    let signer = ctx.accounts.signer.key();
    let old_value = value_store.set_as_owner(signer, new_value)?;

    emit!(ValueChanged {
        value_store: value_store.key(),
        updated_by: signer,
        old_value,
        new_value,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::instructions::{handle_get_value, ValueStoreGet};
    use anchor_lang::error::Error;

    #[test]
    fn test_set_value_handlers() {
        let owner = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let store_key = Pubkey::new_unique();
        let system = System::id();

        let mut store = ValueStore::default();
        store.init(255, owner, 5);
        let mut store_data = vec![0u8; 8 + ValueStore::INIT_SPACE];
        store.try_serialize(&mut &mut store_data[..]).unwrap();

        let (mut store_lamports, mut owner_lamports, mut other_lamports) = (1u64, 0u64, 0u64);
        let (mut owner_data, mut other_data) = ([0u8; 0], [0u8; 0]);
        let store_info = AccountInfo::new(
            &store_key, false, true, &mut store_lamports, &mut store_data, &crate::ID, false, 0,
        );
        let owner_info = AccountInfo::new(
            &owner, true, false, &mut owner_lamports, &mut owner_data, &system, false, 0,
        );
        let other_info = AccountInfo::new(
            &other, true, false, &mut other_lamports, &mut other_data, &system, false, 0,
        );

        // any signer may write through set_value
        let mut accounts = ValueStoreSet {
            value_store: Account::try_from(&store_info).unwrap(),
            signer: Signer::try_from(&other_info).unwrap(),
        };
        handle_set_value(Context::new(&crate::ID, &mut accounts, &[], Default::default()), 9).unwrap();
        assert_eq!(accounts.value_store.value, 9);
        assert_eq!(accounts.value_store.update_count, 1);

        let err = handle_set_value_owner_only(
            Context::new(&crate::ID, &mut accounts, &[], Default::default()),
            10,
        )
        .unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::Unauthorized));
        assert_eq!(accounts.value_store.value, 9);

        accounts.signer = Signer::try_from(&owner_info).unwrap();
        handle_set_value_owner_only(Context::new(&crate::ID, &mut accounts, &[], Default::default()), 10)
            .unwrap();
        assert_eq!(accounts.value_store.value, 10);
        assert_eq!(accounts.value_store.update_count, 2);

        let mut view = ValueStoreGet {
            value_store: accounts.value_store.clone(),
        };
        let value = handle_get_value(Context::new(&crate::ID, &mut view, &[], Default::default())).unwrap();
        assert_eq!(value, 10);
    }
}
