//! Login, signup and account-linking workflows.
//!
//! Each workflow verifies a credential with a provider adapter, resolves
//! the identity behind it, merges the binding and mints a session. Once the
//! credential is verified and the uid is known, a failed merge is logged
//! and the session is still issued.

use crate::{
    AccountLinker, IdentityError, IdentityResolver, OAuthCallback, ProviderDetail,
    Result as IdentityErrorResult, SessionGrant, UserProfileView, check_password_strength,
};

use fed_auth::{AuthenticatedPrincipal, LoginRateLimiter, SessionIssuer};
use fed_core::{Identity, ProviderKind, VerifiedProfile, normalize_email};
use fed_providers::{OAuthProvider, PasswordAccount, ProviderRegistry};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{info, warn};

#[derive(Clone)]
pub struct FederationService {
    resolver: IdentityResolver,
    linker: AccountLinker,
    issuer: Arc<SessionIssuer>,
    providers: ProviderRegistry,
    login_limiter: Arc<LoginRateLimiter>,
}

impl FederationService {
    pub fn new(
        resolver: IdentityResolver,
        linker: AccountLinker,
        issuer: Arc<SessionIssuer>,
        providers: ProviderRegistry,
        login_limiter: Arc<LoginRateLimiter>,
    ) -> Self {
        Self {
            resolver,
            linker,
            issuer,
            providers,
            login_limiter,
        }
    }

    pub fn resolver(&self) -> &IdentityResolver {
        &self.resolver
    }

    pub fn linker(&self) -> &AccountLinker {
        &self.linker
    }

    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    /// Sign in (or, with `link_uid`, link) through an OAuth provider.
    ///
    /// Link mode requires a session whose uid equals `link_uid`; the
    /// returned session is for that identity.
    pub async fn login_with_oauth(
        &self,
        kind: ProviderKind,
        callback: &OAuthCallback,
        principal: Option<&AuthenticatedPrincipal>,
    ) -> IdentityErrorResult<SessionGrant> {
        if !kind.is_oauth() {
            return Err(IdentityError::validation(
                format!("{} is not an OAuth provider", kind.display_name()),
                "provider",
            ));
        }

        if let Some(link_uid) = &callback.link_uid {
            let authorized = principal.is_some_and(|p| &p.uid == link_uid);
            if !authorized {
                warn!("Rejected {} link request for {}: session mismatch", kind, link_uid);
                return Err(IdentityError::auth(
                    "linking requires a session for the account being linked",
                ));
            }
        }

        let provider = self.providers.oauth(kind)?;
        let profile = verify_oauth(provider.as_ref(), callback).await?;

        if let Some(link_uid) = &callback.link_uid {
            self.linker.link_provider(link_uid, &profile).await?;
            info!("{} account {} linked to {} via login", kind, profile.email, link_uid);
            return self.grant(link_uid, &profile.email);
        }

        self.sign_in(&profile).await
    }

    /// Sign in with email and password checked by the backing auth service
    pub async fn login_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> IdentityErrorResult<SessionGrant> {
        let email = normalize_email(email)?;
        if password.is_empty() {
            return Err(IdentityError::validation("password is required", "password"));
        }

        self.login_limiter.check(&email)?;
        info!("Password login attempt for {}", email);

        let account = self
            .providers
            .password()?
            .verify_password(&email, password)
            .await?;

        let profile = password_profile(&account)?;
        self.sign_in(&profile).await
    }

    /// Register a password account and record its identity.
    ///
    /// An email already bound to any identity is refused before the
    /// backing service is asked to create anything.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
    ) -> IdentityErrorResult<PasswordAccount> {
        let email = normalize_email(email)?;
        check_password_strength(password)?;

        if let Some(existing) = self.resolver.find_by_email(&email).await? {
            warn!("Signup for {} refused: already bound to {}", email, existing.uid);
            return Err(IdentityError::conflict("email is already registered"));
        }

        let account = self
            .providers
            .password()?
            .create_account(&email, password)
            .await?;
        info!("Created password account {} for {}", account.uid, email);

        let profile = password_profile(&account)?;
        if let Err(e) = self.linker.merge_profile(&account.uid, &profile).await {
            warn!("Account {} created but identity not stored: {}", account.uid, e);
        }

        Ok(account)
    }

    /// Attach another sign-in method to the caller's identity.
    ///
    /// For `password` the credential is the caller's password for their
    /// session email; for OAuth kinds it is an authorization code.
    pub async fn link_account(
        &self,
        principal: &AuthenticatedPrincipal,
        kind: ProviderKind,
        credential: &str,
        redirect_uri: Option<&str>,
        code_verifier: Option<&str>,
    ) -> IdentityErrorResult<Identity> {
        if credential.is_empty() {
            return Err(IdentityError::validation("credential is required", "credential"));
        }

        let profile = match kind {
            ProviderKind::Password => {
                let account = self
                    .providers
                    .password()?
                    .verify_password(&principal.email, credential)
                    .await?;
                password_profile(&account)?
            }
            kind => {
                let provider = self.providers.oauth(kind)?;
                let callback = OAuthCallback::new(credential, redirect_uri.unwrap_or_default())
                    .with_code_verifier(code_verifier.map(str::to_string));
                verify_oauth(provider.as_ref(), &callback).await?
            }
        };

        self.linker.link_provider(&principal.uid, &profile).await
    }

    pub async fn unlink_account(
        &self,
        principal: &AuthenticatedPrincipal,
        kind: ProviderKind,
    ) -> IdentityErrorResult<Identity> {
        self.linker.unlink_provider(&principal.uid, kind).await
    }

    /// Linked kinds for the caller; an unknown identity has none
    pub async fn linked_providers(
        &self,
        principal: &AuthenticatedPrincipal,
    ) -> IdentityErrorResult<Vec<ProviderKind>> {
        Ok(self
            .resolver
            .resolve_or_default(&principal.uid)
            .await?
            .linked_kinds())
    }

    pub async fn provider_details(
        &self,
        principal: &AuthenticatedPrincipal,
    ) -> IdentityErrorResult<Vec<ProviderDetail>> {
        let identity = self.resolver.resolve_or_default(&principal.uid).await?;
        Ok(ProviderDetail::for_identity(&identity))
    }

    pub async fn user_profile(
        &self,
        principal: &AuthenticatedPrincipal,
    ) -> IdentityErrorResult<UserProfileView> {
        let identity = self.resolver.resolve_or_default(&principal.uid).await?;
        Ok(UserProfileView::from(&identity))
    }

    pub async fn update_profile(
        &self,
        principal: &AuthenticatedPrincipal,
        user_name: &str,
        user_color: &str,
    ) -> IdentityErrorResult<Identity> {
        self.linker
            .update_profile(&principal.uid, user_name, user_color)
            .await
    }

    /// Resolve, merge and mint.
    ///
    /// A password sign-in whose email clashes with another identity gets a
    /// session for the backend uid and nothing is merged. Unverified OAuth
    /// emails still get `Conflict`.
    async fn sign_in(&self, profile: &VerifiedProfile) -> IdentityErrorResult<SessionGrant> {
        let resolution = match self.resolver.resolve_for_profile(profile).await {
            Ok(resolution) => resolution,
            Err(IdentityError::Conflict { .. }) if profile.kind == ProviderKind::Password => {
                let uid = profile.candidate_uid();
                warn!(
                    "Password sign-in for {} clashes with another identity's email; \
                     issuing session for {} without merging",
                    profile.email, uid
                );
                return self.grant(&uid, &profile.email);
            }
            Err(e) => return Err(e),
        };
        let uid = resolution.identity.uid.clone();
        info!(
            "{} sign-in for {} resolved to {} ({:?})",
            profile.kind, profile.email, uid, resolution.resolved_by
        );

        if let Err(e) = self.linker.merge_profile(&uid, profile).await {
            warn!(
                "Signed in {} but failed to record {} binding: {}",
                uid, profile.kind, e
            );
        }

        self.grant(&uid, &profile.email)
    }

    fn grant(&self, uid: &str, email: &str) -> IdentityErrorResult<SessionGrant> {
        let session_token = self.issuer.mint(uid, email)?;
        Ok(SessionGrant {
            uid: uid.to_string(),
            email: email.to_string(),
            session_token,
        })
    }
}

async fn verify_oauth(
    provider: &dyn OAuthProvider,
    callback: &OAuthCallback,
) -> IdentityErrorResult<VerifiedProfile> {
    if callback.code.trim().is_empty() {
        return Err(IdentityError::validation("code is required", "code"));
    }
    if callback.redirect_uri.trim().is_empty() {
        return Err(IdentityError::validation(
            "redirect_uri is required",
            "redirect_uri",
        ));
    }

    let token = provider
        .exchange_code(
            &callback.code,
            &callback.redirect_uri,
            callback.code_verifier.as_deref(),
        )
        .await?;

    let profile = provider.fetch_profile(&token).await?;
    Ok(profile.into_verified(provider.kind())?)
}

/// Password accounts never vouch for mailbox ownership
#[track_caller]
fn password_profile(account: &PasswordAccount) -> IdentityErrorResult<VerifiedProfile> {
    let caller = Location::caller();
    VerifiedProfile::new(ProviderKind::Password, &account.uid, &account.email, false).map_err(
        |e| {
            warn!("Password backend returned an unusable account: {}", e);
            IdentityError::Internal {
                message: "password backend returned an invalid account".to_string(),
                location: ErrorLocation::from(caller),
            }
        },
    )
}
