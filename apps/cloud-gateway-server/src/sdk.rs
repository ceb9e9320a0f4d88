//! Shared AWS SDK configuration loading
//!
//! Both backend clients start from the default provider chain (environment,
//! profile, instance metadata) and layer the explicit settings on top.

use aws_config::{meta::region::RegionProviderChain, BehaviorVersion, SdkConfig};
use aws_sdk_s3::config::{Credentials, Region};

use crate::config::StaticCredentials;

/// Region used when neither the configuration nor the environment provides one
pub const FALLBACK_REGION: &str = "us-east-1";

/// Load an `SdkConfig` for the given region and optional static credentials
pub async fn load_sdk_config(
    region: Option<&str>,
    credentials: Option<&StaticCredentials>,
) -> SdkConfig {
    let region_provider = RegionProviderChain::first_try(region.map(|r| Region::new(r.to_string())))
        .or_default_provider()
        .or_else(Region::new(FALLBACK_REGION));

    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);

    if let Some(creds) = credentials {
        loader = loader.credentials_provider(Credentials::new(
            &creds.access_key,
            &creds.secret_key,
            None,
            None,
            "cloud-gateway",
        ));
    }

    loader.load().await
}
