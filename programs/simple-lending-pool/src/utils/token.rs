use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::error::ErrorCode;

/// Token ledger the pool moves one mint through: the participant's account on one
/// side, the pool's reserve account on the other.
pub trait TokenVault {
    /// Amount currently held in the pool's reserve account
    fn reserve_balance(&self) -> u64;

    /// Move `amount` from the participant into the reserve, on the participant's authority
    fn pull_from_user(&mut self, amount: u64) -> Result<()>;

    /// Move `amount` out of the reserve to the participant, on the pool's authority
    fn pay_to_user(&mut self, amount: u64) -> Result<()>;
}

/// Transfer out of an account owned by the pool PDA
pub fn transfer_token_from<'a>(
    token_program: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    authority: AccountInfo<'a>,
    amount: u64,
    seeds: &[&[u8]],
) -> Result<()> {
    token::transfer(
        CpiContext::new_with_signer(
            token_program,
            Transfer {
                from,
                to,
                authority,
            },
            &[seeds]
        ),
        amount,
    )
}

/// Transfer out of an account whose owner signed the transaction
pub fn transfer_token_to<'a>(
    token_program: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    authority: AccountInfo<'a>,
    amount: u64,
) -> Result<()> {
    token::transfer(
        CpiContext::new(
            token_program,
            Transfer {
                from,
                to,
                authority,
            }
        ),
        amount,
    )
}

/// SPL token implementation of [`TokenVault`]
pub struct SplTokenVault<'a, 'info> {
    token_program: AccountInfo<'info>,
    user_token_account: AccountInfo<'info>,
    user_balance: u64,
    vault: AccountInfo<'info>,
    vault_balance: u64,
    user: AccountInfo<'info>,
    pool: AccountInfo<'info>,
    pool_seeds: &'a [&'a [u8]],
}

impl<'a, 'info> SplTokenVault<'a, 'info> {
    pub fn new(
        token_program: &Program<'info, Token>,
        user_token_account: &Account<'info, TokenAccount>,
        vault: &Account<'info, TokenAccount>,
        user: &Signer<'info>,
        pool: AccountInfo<'info>,
        pool_seeds: &'a [&'a [u8]],
    ) -> Self {
        Self::from_parts(
            token_program.to_account_info(),
            (user_token_account.to_account_info(), user_token_account.amount),
            (vault.to_account_info(), vault.amount),
            user.to_account_info(),
            pool,
            pool_seeds,
        )
    }

    /// Build from raw accounts, each token account paired with its current balance
    pub fn from_parts(
        token_program: AccountInfo<'info>,
        (user_token_account, user_balance): (AccountInfo<'info>, u64),
        (vault, vault_balance): (AccountInfo<'info>, u64),
        user: AccountInfo<'info>,
        pool: AccountInfo<'info>,
        pool_seeds: &'a [&'a [u8]],
    ) -> Self {
        Self {
            token_program,
            user_token_account,
            user_balance,
            vault,
            vault_balance,
            user,
            pool,
            pool_seeds,
        }
    }
}

impl<'a, 'info> TokenVault for SplTokenVault<'a, 'info> {
    fn reserve_balance(&self) -> u64 {
        self.vault_balance
    }

    fn pull_from_user(&mut self, amount: u64) -> Result<()> {
        if self.user_balance < amount {
            msg!("User token balance {} is below {}", self.user_balance, amount);
            return Err(ErrorCode::TransferFailed.into());
        }

        transfer_token_to(
            self.token_program.clone(),
            self.user_token_account.clone(), //source
            self.vault.clone(), //destination
            self.user.clone(),
            amount,
        )
        .map_err(|err| {
            msg!("Transfer into reserve failed: {}", err);
            error!(ErrorCode::TransferFailed)
        })?;

        self.user_balance -= amount;
        self.vault_balance = self
            .vault_balance
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    fn pay_to_user(&mut self, amount: u64) -> Result<()> {
        if self.vault_balance < amount {
            msg!("Reserve balance {} is below {}", self.vault_balance, amount);
            return Err(ErrorCode::TransferFailed.into());
        }

        transfer_token_from(
            self.token_program.clone(),
            self.vault.clone(), //source
            self.user_token_account.clone(), //destination
            self.pool.clone(),
            amount,
            self.pool_seeds,
        )
        .map_err(|err| {
            msg!("Transfer out of reserve failed: {}", err);
            error!(ErrorCode::TransferFailed)
        })?;

        self.vault_balance -= amount;
        self.user_balance = self
            .user_balance
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }
}

/// In-memory token ledger with ERC20-style allowances, used to drive the pool without a validator.
/// One reserve is shared by every participant of the mint.
#[cfg(test)]
pub mod mock {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct MockTokenLedger {
        pub reserve: u64,
        pub balances: Vec<u64>,
        pub allowances: Vec<u64>,
        /// Makes every transfer fail after its checks pass, as a failing CPI would
        pub reject_transfers: bool,
    }

    impl MockTokenLedger {
        pub fn new(reserve: u64, participants: usize) -> Self {
            Self {
                reserve,
                balances: vec![0; participants],
                allowances: vec![0; participants],
                reject_transfers: false,
            }
        }

        /// View of the ledger from one participant's token account
        pub fn vault(&mut self, participant: usize) -> MockTokenVault<'_> {
            MockTokenVault {
                ledger: self,
                participant,
            }
        }
    }

    pub struct MockTokenVault<'a> {
        ledger: &'a mut MockTokenLedger,
        participant: usize,
    }

    impl TokenVault for MockTokenVault<'_> {
        fn reserve_balance(&self) -> u64 {
            self.ledger.reserve
        }

        fn pull_from_user(&mut self, amount: u64) -> Result<()> {
            let ledger = &mut *self.ledger;
            let i = self.participant;
            if ledger.reject_transfers || ledger.allowances[i] < amount || ledger.balances[i] < amount {
                return Err(ErrorCode::TransferFailed.into());
            }
            ledger.allowances[i] -= amount;
            ledger.balances[i] -= amount;
            ledger.reserve += amount;
            Ok(())
        }

        fn pay_to_user(&mut self, amount: u64) -> Result<()> {
            let ledger = &mut *self.ledger;
            if ledger.reject_transfers || ledger.reserve < amount {
                return Err(ErrorCode::TransferFailed.into());
            }
            ledger.reserve -= amount;
            ledger.balances[self.participant] += amount;
            Ok(())
        }
    }
}
