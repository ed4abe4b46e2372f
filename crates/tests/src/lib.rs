#[cfg(test)]
mod common;

#[cfg(test)]
mod role_dispatch_tests;

#[cfg(test)]
mod shell_view_tests;

#[cfg(test)]
mod portal_access_tests;

#[cfg(test)]
mod cache_policy_tests;

#[cfg(test)]
mod session_token_tests;

#[cfg(test)]
mod cookie_tests;

#[cfg(test)]
mod error_payload_tests;
