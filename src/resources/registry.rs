// ABOUTME: Configurable registry of resource modules wired into a client
// ABOUTME: Bitflag selection parsed from configuration and typed accessors on FitbitClient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Activity, Body, Heart, Profile, Sleep, Water};
use crate::FitbitClient;
use bitflags::bitflags;
use fitbit_core::{FitbitError, FitbitResult};

bitflags! {
    /// Resource modules enabled for a client
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResourceSet: u8 {
        /// Activity logs and browsing
        const ACTIVITY = 1;
        /// Body time series
        const BODY = 1 << 1;
        /// Intraday heart rate
        const HEART = 1 << 2;
        /// User profile
        const PROFILE = 1 << 3;
        /// Sleep logs and goal
        const SLEEP = 1 << 4;
        /// Water logs and goal
        const WATER = 1 << 5;
    }
}

const NAMES: [(&str, ResourceSet); 6] = [
    ("activity", ResourceSet::ACTIVITY),
    ("body", ResourceSet::BODY),
    ("heart", ResourceSet::HEART),
    ("profile", ResourceSet::PROFILE),
    ("sleep", ResourceSet::SLEEP),
    ("water", ResourceSet::WATER),
];

impl ResourceSet {
    /// Parse a comma-separated list of module names (`all` selects everything)
    ///
    /// # Errors
    ///
    /// Returns the offending name when it is not a known module
    pub fn from_names(list: &str) -> Result<Self, String> {
        let mut set = Self::empty();
        for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            let name = name.to_lowercase();
            if name == "all" {
                set |= Self::all();
                continue;
            }
            let flag = NAMES
                .iter()
                .find_map(|(known, flag)| (*known == name).then_some(*flag))
                .ok_or_else(|| format!("unknown resource module '{name}'"))?;
            set |= flag;
        }
        Ok(set)
    }
}

impl Default for ResourceSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FitbitClient {
    fn resource<R>(
        &self,
        flag: ResourceSet,
        resource: &'static str,
        build: impl FnOnce(Self) -> R,
    ) -> FitbitResult<R> {
        if self.config().resources.contains(flag) {
            Ok(build(self.clone()))
        } else {
            Err(FitbitError::ResourceDisabled { resource })
        }
    }

    /// Activity module
    ///
    /// # Errors
    ///
    /// Returns `ResourceDisabled` when the module is not configured
    pub fn activity(&self) -> FitbitResult<Activity<Self>> {
        self.resource(ResourceSet::ACTIVITY, "activity", Activity::new)
    }

    /// Body module
    ///
    /// # Errors
    ///
    /// Returns `ResourceDisabled` when the module is not configured
    pub fn body(&self) -> FitbitResult<Body<Self>> {
        self.resource(ResourceSet::BODY, "body", Body::new)
    }

    /// Heart rate module
    ///
    /// # Errors
    ///
    /// Returns `ResourceDisabled` when the module is not configured
    pub fn heart(&self) -> FitbitResult<Heart<Self>> {
        self.resource(ResourceSet::HEART, "heart", Heart::new)
    }

    /// Profile module
    ///
    /// # Errors
    ///
    /// Returns `ResourceDisabled` when the module is not configured
    pub fn profile(&self) -> FitbitResult<Profile<Self>> {
        self.resource(ResourceSet::PROFILE, "profile", Profile::new)
    }

    /// Sleep module
    ///
    /// # Errors
    ///
    /// Returns `ResourceDisabled` when the module is not configured
    pub fn sleep(&self) -> FitbitResult<Sleep<Self>> {
        self.resource(ResourceSet::SLEEP, "sleep", Sleep::new)
    }

    /// Water module
    ///
    /// # Errors
    ///
    /// Returns `ResourceDisabled` when the module is not configured
    pub fn water(&self) -> FitbitResult<Water<Self>> {
        self.resource(ResourceSet::WATER, "water", Water::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;
    use fitbit_core::Credentials;

    #[test]
    fn parses_module_lists() {
        assert_eq!(ResourceSet::from_names("all").unwrap(), ResourceSet::all());
        assert_eq!(
            ResourceSet::from_names(" Sleep,water ,").unwrap(),
            ResourceSet::SLEEP | ResourceSet::WATER
        );
        assert!(ResourceSet::from_names("sleep,food").unwrap_err().contains("food"));
    }

    #[test]
    fn disabled_modules_are_refused() {
        let config = ClientConfig::new(Credentials::new("id", "secret"))
            .with_resources(ResourceSet::PROFILE);
        let client = FitbitClient::new(config).unwrap();

        assert!(client.profile().is_ok());
        assert!(matches!(
            client.sleep(),
            Err(FitbitError::ResourceDisabled { resource: "sleep" })
        ));
    }
}
