use std::ops::{Deref, DerefMut};

use cosmwasm_std::testing::{MockApi, MockStorage};
use cosmwasm_std::Empty;
use cw_multi_test::{
    App, AppBuilder, BankKeeper, DistributionKeeper, FailingModule, GovFailingModule,
    IbcFailingModule, StakeKeeper, WasmKeeper,
};

use crate::stargate::StargateKeeper;

pub type OmniflixAppWrapped = App<
    BankKeeper,
    MockApi,
    MockStorage,
    FailingModule<Empty, Empty, Empty>,
    WasmKeeper<Empty, Empty>,
    StakeKeeper,
    DistributionKeeper,
    IbcFailingModule,
    GovFailingModule,
    StargateKeeper,
>;

/// Multi-test app whose Stargate router understands the ONFT module.
pub struct OmniflixApp {
    inner: OmniflixAppWrapped,
}

impl OmniflixApp {
    pub fn new() -> Self {
        Self::with_stargate(StargateKeeper::default())
    }

    pub fn with_stargate(stargate: StargateKeeper) -> Self {
        let inner = AppBuilder::new()
            .with_stargate(stargate)
            .build(|_, _, _| {});
        Self { inner }
    }
}

impl Default for OmniflixApp {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for OmniflixApp {
    type Target = OmniflixAppWrapped;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for OmniflixApp {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
