#![cfg(test)]

use proptest::prelude::*;
use token_contract::{Token, TokenError, TokenInterface, APPROVAL_TOPIC, TRANSFER_TOPIC};

use crate::testutils::{addr, amt, assert_conserved, assert_non_negative, Setup};

#[test]
fn test_lifecycle() {
    let mut setup = Setup::new(1000);
    let [a, b, c, d] = [
        setup.accounts[0],
        setup.accounts[1],
        setup.accounts[2],
        setup.accounts[3],
    ];

    assert_eq!(Token::total_supply(&setup.env), amt(1000));
    assert_eq!(Token::balance_of(&setup.env, a), amt(1000));
    assert_eq!(Token::balance_of(&setup.env, b), amt(0));

    assert_eq!(Token::transfer(&mut setup.env, b, amt(300)), Ok(true));
    assert_conserved(&setup.env, &setup.accounts);

    setup.env.set_caller(b);
    assert_eq!(Token::approve(&mut setup.env, c, amt(150)), Ok(true));

    setup.env.set_caller(c);
    assert_eq!(
        Token::transfer_from(&mut setup.env, b, d, amt(150)),
        Ok(true)
    );
    assert_eq!(Token::balance_of(&setup.env, b), amt(150));
    assert_eq!(Token::balance_of(&setup.env, d), amt(150));
    assert_eq!(Token::allowance(&setup.env, b, c), amt(0));
    assert_conserved(&setup.env, &setup.accounts);

    // One Approval between two Transfers, in invocation order.
    let topics: Vec<_> = setup.env.logs().iter().map(|r| r.topic).collect();
    assert_eq!(topics, vec![TRANSFER_TOPIC, APPROVAL_TOPIC, TRANSFER_TOPIC]);

    // A failed draw adds nothing to the log and moves nothing.
    let before = setup.env.clone();
    assert_eq!(
        Token::transfer_from(&mut setup.env, b, d, amt(1)),
        Err(TokenError::PreconditionViolation)
    );
    assert_eq!(setup.env, before);
}

#[derive(Clone, Debug)]
enum Op {
    Transfer {
        from: usize,
        to: usize,
        amount: i64,
    },
    Approve {
        owner: usize,
        spender: usize,
        amount: i64,
    },
    TransferFrom {
        spender: usize,
        from: usize,
        to: usize,
        amount: i64,
    },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let idx = || 0usize..4;
    // Amounts overshoot typical balances and dip negative so every abort
    // path gets exercised alongside the committing ones.
    let amount = || -100i64..3000;
    prop_oneof![
        (idx(), idx(), amount()).prop_map(|(from, to, amount)| Op::Transfer { from, to, amount }),
        (idx(), idx(), amount()).prop_map(|(owner, spender, amount)| Op::Approve {
            owner,
            spender,
            amount
        }),
        (idx(), idx(), idx(), amount()).prop_map(|(spender, from, to, amount)| {
            Op::TransferFrom {
                spender,
                from,
                to,
                amount,
            }
        }),
    ]
}

proptest! {
    // Conservation and non-negativity must survive arbitrary operation
    // sequences, and an aborted invocation must leave the host exactly
    // as it found it.
    #[test]
    fn invariants_hold_under_arbitrary_sequences(
        ops in prop::collection::vec(op_strategy(), 1..60)
    ) {
        let mut setup = Setup::new(10_000);

        for op in ops {
            let result = match op {
                Op::Transfer { from, to, amount } => {
                    setup.env.set_caller(setup.accounts[from]);
                    let before = setup.env.clone();
                    let r = Token::transfer(&mut setup.env, setup.accounts[to], amt(amount));
                    if r.is_err() {
                        prop_assert_eq!(&setup.env, &before);
                    }
                    r
                }
                Op::Approve { owner, spender, amount } => {
                    setup.env.set_caller(setup.accounts[owner]);
                    let before = setup.env.clone();
                    let r = Token::approve(&mut setup.env, setup.accounts[spender], amt(amount));
                    if r.is_err() {
                        prop_assert_eq!(&setup.env, &before);
                    }
                    r
                }
                Op::TransferFrom { spender, from, to, amount } => {
                    setup.env.set_caller(setup.accounts[spender]);
                    let before = setup.env.clone();
                    let r = Token::transfer_from(
                        &mut setup.env,
                        setup.accounts[from],
                        setup.accounts[to],
                        amt(amount),
                    );
                    if r.is_err() {
                        prop_assert_eq!(&setup.env, &before);
                    }
                    r
                }
            };
            if let Ok(committed) = result {
                prop_assert!(committed);
            }

            assert_conserved(&setup.env, &setup.accounts);
            assert_non_negative(&setup.env, &setup.accounts);
        }
    }

    // Strangers to the initial supply can only move value they received.
    #[test]
    fn value_never_appears_from_nowhere(amount in 1i64..5000) {
        let mut setup = Setup::new(1000);
        let outsider = addr(0xE5);
        setup.env.set_caller(outsider);

        let r = Token::transfer(&mut setup.env, setup.accounts[1], amt(amount));
        prop_assert_eq!(r, Err(TokenError::PreconditionViolation));
        prop_assert_eq!(Token::balance_of(&setup.env, outsider), amt(0));
        prop_assert_eq!(Token::balance_of(&setup.env, setup.accounts[1]), amt(0));
    }
}
