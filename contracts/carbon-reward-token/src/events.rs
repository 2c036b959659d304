use soroban_sdk::{symbol_short, Address, Env};

/// Event publishers for every state change of the ledger.
pub struct TokenEvents;

impl TokenEvents {
    pub fn initialized(env: &Env, owner: &Address) {
        let topics = (symbol_short!("token"), symbol_short!("init"));
        env.events().publish(topics, owner.clone());
    }

    pub fn admin_changed(env: &Env, caller: &Address, new_admin: &Address) {
        let topics = (symbol_short!("admin"), symbol_short!("changed"));
        env.events()
            .publish(topics, (caller.clone(), new_admin.clone()));
    }

    pub fn minter_added(env: &Env, admin: &Address, minter: &Address) {
        let topics = (symbol_short!("minter"), symbol_short!("added"));
        env.events()
            .publish(topics, (admin.clone(), minter.clone()));
    }

    pub fn minter_removed(env: &Env, admin: &Address, minter: &Address) {
        let topics = (symbol_short!("minter"), symbol_short!("removed"));
        env.events()
            .publish(topics, (admin.clone(), minter.clone()));
    }

    pub fn paused(env: &Env, admin: &Address) {
        let topics = (symbol_short!("pause"), symbol_short!("on"));
        env.events().publish(topics, admin.clone());
    }

    pub fn unpaused(env: &Env, admin: &Address) {
        let topics = (symbol_short!("pause"), symbol_short!("off"));
        env.events().publish(topics, admin.clone());
    }

    pub fn uri_set(env: &Env, admin: &Address) {
        let topics = (symbol_short!("uri"), symbol_short!("set"));
        env.events().publish(topics, admin.clone());
    }

    pub fn mint(env: &Env, id: u64, recipient: &Address, amount: i128, minter: &Address) {
        let topics = (symbol_short!("mint"), recipient.clone());
        env.events()
            .publish(topics, (id, amount, minter.clone(), env.ledger().sequence()));
    }

    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
        let topics = (symbol_short!("transfer"), from.clone(), to.clone());
        env.events().publish(topics, amount);
    }

    pub fn burn(env: &Env, from: &Address, amount: i128) {
        let topics = (symbol_short!("burn"), from.clone());
        env.events().publish(topics, amount);
    }

    pub fn batch_minted(env: &Env, minter: &Address, first_id: u64, count: u32, total: i128) {
        let topics = (symbol_short!("batch"), symbol_short!("minted"));
        env.events()
            .publish(topics, (minter.clone(), first_id, count, total));
    }
}
