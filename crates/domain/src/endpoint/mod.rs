//! Endpoint catalog
//!
//! Every operation the Repair Minder API exposes is one [`Endpoint`] variant.
//! Resolution to path, method, query and auth requirement is a total function
//! over the enum: each mapping is a single `match` with no catch-all arm, so
//! adding a variant without wiring it up fails to compile.

mod filters;
mod query;

pub use filters::*;
pub use query::QueryBuilder;

use serde::{Deserialize, Serialize};

/// HTTP verbs used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logical API operation
///
/// Identifiers are inserted into paths verbatim. Request bodies are not part
/// of the descriptor; the executor takes them alongside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    // Staff authentication
    Login,
    TwoFactorRequest,
    TwoFactorVerify,
    MagicLinkRequest,
    MagicLinkVerifyCode,
    RefreshToken,
    Me,
    Logout,

    // Dashboard
    DashboardStats { scope: StatsScope, period: DatePeriod },
    EnquiryStats { scope: StatsScope, include_breakdown: bool },
    CategoryBreakdown { scope: StatsScope, period: DatePeriod },

    // Orders
    Orders(OrderListQuery),
    Order { id: String },
    CreateOrder,
    UpdateOrder { id: String },
    OrderDocument { order_id: String, kind: DocumentKind },

    // Devices
    Devices(DeviceListQuery),
    Device { id: String },
    UpdateDevice { id: String },
    MyQueue(QueueQuery),
    MyActiveWork,
    DeviceTypes,

    // Clients
    Clients { page: PageRequest, search: Option<String> },
    Client { id: String },
    ClientOrders { id: String, page: PageRequest },

    // Tickets
    Tickets { page: PageRequest, status: Option<String> },
    Ticket { id: String },
    TicketMessages { id: String },
    SendTicketMessage { id: String },

    // Staff enquiries
    Enquiries { page: PageRequest, status: Option<String> },
    /// Counters for the enquiry inbox
    EnquiryListStats,
    Enquiry { id: String },
    EnquiryMessages { id: String },
    EnquiryReply { id: String },
    MarkEnquiryRead { id: String },
    ArchiveEnquiry { id: String },
    MarkEnquirySpam { id: String },
    ConvertEnquiry { id: String },

    // Scanner lookup
    LookupQr { code: String },
    LookupBarcode { barcode: String },

    // Settings and push
    UserSettings,
    UpdateUserSettings,
    RegisterDeviceToken,
    UnregisterDeviceToken,
    PushPreferences,
    UpdatePushPreferences,
    Locations,

    // Passcode
    SetPasscode,
    VerifyPasscode,
    ChangePasscode,
    ResetPasscodeRequest,
    ResetPasscode,
    TogglePasscodeEnabled,
    PasscodeTimeout,

    // Macros and buyback
    Macros,
    ExecuteMacro { id: String },
    CancelMacroExecution { id: String },
    Buyback(BuybackQuery),

    // Payments
    PaymentLinks { order_id: String },
    CreatePaymentLink,
    CancelPaymentLink { link_id: String },

    // Customer portal
    CustomerMagicLinkRequest,
    CustomerVerifyCode,
    CustomerLogout,
    CustomerOrders { page: PageRequest },
    CustomerOrder { id: String },
    CustomerOrderTimeline { id: String },
    CustomerOrderQuote { order_id: String },
    CustomerApproveQuote { order_id: String },
    CustomerRejectQuote { order_id: String },
    CustomerEnquiries { page: PageRequest },
    CustomerEnquiry { id: String },
    CustomerSubmitEnquiry,
    CustomerEnquiryReply { id: String },
    CustomerShops,
    CustomerConversations,
    CustomerOrderMessages { order_id: String },
    CustomerSendMessage { order_id: String },

    // Public, unauthenticated
    CompanyPublicInfo { slug: String },
    SubmitLead { slug: String },
}

impl Endpoint {
    /// Path relative to the base origin
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/api/auth/login".into(),
            Self::TwoFactorRequest => "/api/auth/2fa/request".into(),
            Self::TwoFactorVerify => "/api/auth/2fa/verify".into(),
            Self::MagicLinkRequest => "/api/auth/magic-link/request".into(),
            Self::MagicLinkVerifyCode => "/api/auth/magic-link/verify-code".into(),
            Self::RefreshToken => "/api/auth/refresh".into(),
            Self::Me => "/api/auth/me".into(),
            Self::Logout => "/api/auth/logout".into(),

            Self::DashboardStats { .. } => "/api/dashboard/stats".into(),
            Self::EnquiryStats { .. } => "/api/dashboard/enquiry-stats".into(),
            Self::CategoryBreakdown { .. } => "/api/dashboard/category-breakdown".into(),

            Self::Orders(_) | Self::CreateOrder => "/api/orders".into(),
            Self::Order { id } | Self::UpdateOrder { id } => format!("/api/orders/{id}"),
            Self::OrderDocument { order_id, kind } => {
                format!("/api/orders/{order_id}/documents/{kind}")
            }

            Self::Devices(_) => "/api/devices".into(),
            Self::Device { id } | Self::UpdateDevice { id } => format!("/api/devices/{id}"),
            Self::MyQueue(_) => "/api/devices/my-queue".into(),
            Self::MyActiveWork => "/api/devices/my-active-work".into(),
            Self::DeviceTypes => "/api/device-types".into(),

            Self::Clients { .. } => "/api/clients".into(),
            Self::Client { id } => format!("/api/clients/{id}"),
            Self::ClientOrders { id, .. } => format!("/api/clients/{id}/orders"),

            Self::Tickets { .. } => "/api/tickets".into(),
            Self::Ticket { id } => format!("/api/tickets/{id}"),
            Self::TicketMessages { id } | Self::SendTicketMessage { id } => {
                format!("/api/tickets/{id}/messages")
            }

            Self::Enquiries { .. } => "/api/enquiries".into(),
            Self::EnquiryListStats => "/api/enquiries/stats".into(),
            Self::Enquiry { id } => format!("/api/enquiries/{id}"),
            Self::EnquiryMessages { id } | Self::EnquiryReply { id } => {
                format!("/api/enquiries/{id}/messages")
            }
            Self::MarkEnquiryRead { id } => format!("/api/enquiries/{id}/read"),
            Self::ArchiveEnquiry { id } => format!("/api/enquiries/{id}/archive"),
            Self::MarkEnquirySpam { id } => format!("/api/enquiries/{id}/spam"),
            Self::ConvertEnquiry { id } => format!("/api/enquiries/{id}/convert"),

            Self::LookupQr { .. } => "/api/lookup/qr".into(),
            Self::LookupBarcode { .. } => "/api/lookup/barcode".into(),

            Self::UserSettings | Self::UpdateUserSettings => "/api/user/settings".into(),
            Self::RegisterDeviceToken | Self::UnregisterDeviceToken => {
                "/api/user/device-token".into()
            }
            Self::PushPreferences | Self::UpdatePushPreferences => {
                "/api/user/push-preferences".into()
            }
            Self::Locations => "/api/locations".into(),

            Self::SetPasscode | Self::ChangePasscode => "/api/user/passcode".into(),
            Self::VerifyPasscode => "/api/user/passcode/verify".into(),
            Self::ResetPasscodeRequest => "/api/user/passcode/reset-request".into(),
            Self::ResetPasscode => "/api/user/passcode/reset".into(),
            Self::TogglePasscodeEnabled => "/api/user/passcode/enabled".into(),
            Self::PasscodeTimeout => "/api/user/passcode/timeout".into(),

            Self::Macros => "/api/macros".into(),
            Self::ExecuteMacro { id } => format!("/api/macros/{id}/execute"),
            Self::CancelMacroExecution { id } => format!("/api/macro-executions/{id}/cancel"),
            Self::Buyback(_) => "/api/buyback".into(),

            Self::PaymentLinks { order_id } => format!("/api/orders/{order_id}/payment-links"),
            Self::CreatePaymentLink => "/api/payment-links".into(),
            Self::CancelPaymentLink { link_id } => format!("/api/payment-links/{link_id}/cancel"),

            Self::CustomerMagicLinkRequest => "/api/customer/auth/request-magic-link".into(),
            Self::CustomerVerifyCode => "/api/customer/auth/verify-code".into(),
            Self::CustomerLogout => "/api/customer/auth/logout".into(),
            Self::CustomerOrders { .. } => "/api/customer/orders".into(),
            Self::CustomerOrder { id } => format!("/api/customer/orders/{id}"),
            Self::CustomerOrderTimeline { id } => format!("/api/customer/orders/{id}/timeline"),
            Self::CustomerOrderQuote { order_id } => {
                format!("/api/customer/orders/{order_id}/quote")
            }
            Self::CustomerApproveQuote { order_id } => {
                format!("/api/customer/orders/{order_id}/approve-quote")
            }
            Self::CustomerRejectQuote { order_id } => {
                format!("/api/customer/orders/{order_id}/reject-quote")
            }
            Self::CustomerEnquiries { .. } | Self::CustomerSubmitEnquiry => {
                "/api/customer/enquiries".into()
            }
            Self::CustomerEnquiry { id } => format!("/api/customer/enquiries/{id}"),
            Self::CustomerEnquiryReply { id } => format!("/api/customer/enquiries/{id}/reply"),
            Self::CustomerShops => "/api/customer/shops".into(),
            Self::CustomerConversations => "/api/customer/messages".into(),
            Self::CustomerOrderMessages { order_id } | Self::CustomerSendMessage { order_id } => {
                format!("/api/customer/orders/{order_id}/messages")
            }

            Self::CompanyPublicInfo { slug } => format!("/api/public/companies/{slug}"),
            Self::SubmitLead { slug } => format!("/api/public/companies/{slug}/leads"),
        }
    }

    /// HTTP verb
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        match self {
            Self::Me
            | Self::DashboardStats { .. }
            | Self::EnquiryStats { .. }
            | Self::CategoryBreakdown { .. }
            | Self::Orders(_)
            | Self::Order { .. }
            | Self::OrderDocument { .. }
            | Self::Devices(_)
            | Self::Device { .. }
            | Self::MyQueue(_)
            | Self::MyActiveWork
            | Self::DeviceTypes
            | Self::Clients { .. }
            | Self::Client { .. }
            | Self::ClientOrders { .. }
            | Self::Tickets { .. }
            | Self::Ticket { .. }
            | Self::TicketMessages { .. }
            | Self::Enquiries { .. }
            | Self::EnquiryListStats
            | Self::Enquiry { .. }
            | Self::EnquiryMessages { .. }
            | Self::LookupQr { .. }
            | Self::LookupBarcode { .. }
            | Self::UserSettings
            | Self::PushPreferences
            | Self::Locations
            | Self::Macros
            | Self::Buyback(_)
            | Self::PaymentLinks { .. }
            | Self::CustomerOrders { .. }
            | Self::CustomerOrder { .. }
            | Self::CustomerOrderTimeline { .. }
            | Self::CustomerOrderQuote { .. }
            | Self::CustomerEnquiries { .. }
            | Self::CustomerEnquiry { .. }
            | Self::CustomerShops
            | Self::CustomerConversations
            | Self::CustomerOrderMessages { .. }
            | Self::CompanyPublicInfo { .. } => HttpMethod::Get,

            Self::Login
            | Self::TwoFactorRequest
            | Self::TwoFactorVerify
            | Self::MagicLinkRequest
            | Self::MagicLinkVerifyCode
            | Self::RefreshToken
            | Self::Logout
            | Self::CreateOrder
            | Self::SendTicketMessage { .. }
            | Self::EnquiryReply { .. }
            | Self::MarkEnquiryRead { .. }
            | Self::ArchiveEnquiry { .. }
            | Self::MarkEnquirySpam { .. }
            | Self::ConvertEnquiry { .. }
            | Self::RegisterDeviceToken
            | Self::SetPasscode
            | Self::VerifyPasscode
            | Self::ResetPasscodeRequest
            | Self::ResetPasscode
            | Self::ExecuteMacro { .. }
            | Self::CancelMacroExecution { .. }
            | Self::CreatePaymentLink
            | Self::CancelPaymentLink { .. }
            | Self::CustomerMagicLinkRequest
            | Self::CustomerVerifyCode
            | Self::CustomerLogout
            | Self::CustomerApproveQuote { .. }
            | Self::CustomerRejectQuote { .. }
            | Self::CustomerSubmitEnquiry
            | Self::CustomerEnquiryReply { .. }
            | Self::CustomerSendMessage { .. }
            | Self::SubmitLead { .. } => HttpMethod::Post,

            Self::UpdatePushPreferences
            | Self::ChangePasscode
            | Self::TogglePasscodeEnabled
            | Self::PasscodeTimeout => HttpMethod::Put,

            Self::UpdateOrder { .. } | Self::UpdateDevice { .. } | Self::UpdateUserSettings => {
                HttpMethod::Patch
            }

            Self::UnregisterDeviceToken => HttpMethod::Delete,
        }
    }

    /// Ordered query parameters; empty for operations without filters
    #[must_use]
    pub fn query(&self) -> Vec<(String, String)> {
        match self {
            Self::DashboardStats { scope, period } | Self::CategoryBreakdown { scope, period } => {
                QueryBuilder::new()
                    .push_str("scope", Some(scope.as_str()))
                    .push_str("period", Some(period.as_str()))
                    .build()
            }
            Self::EnquiryStats { scope, include_breakdown } => QueryBuilder::new()
                .push_str("scope", Some(scope.as_str()))
                .push_flag("include_breakdown", *include_breakdown)
                .build(),

            Self::Orders(query) => query.query(),
            Self::Devices(query) => query.query(),
            Self::MyQueue(query) => query.query(),
            Self::Buyback(query) => query.query(),

            Self::Clients { page, search } => {
                page.query().push_str("search", search.as_deref()).build()
            }
            Self::Tickets { page, status } | Self::Enquiries { page, status } => {
                page.query().push_str("status", status.as_deref()).build()
            }
            Self::ClientOrders { page, .. }
            | Self::CustomerOrders { page }
            | Self::CustomerEnquiries { page } => page.query().build(),

            Self::LookupQr { code } => {
                QueryBuilder::new().push_str("code", Some(code.as_str())).build()
            }
            Self::LookupBarcode { barcode } => {
                QueryBuilder::new().push_str("barcode", Some(barcode.as_str())).build()
            }

            Self::Login
            | Self::TwoFactorRequest
            | Self::TwoFactorVerify
            | Self::MagicLinkRequest
            | Self::MagicLinkVerifyCode
            | Self::RefreshToken
            | Self::Me
            | Self::Logout
            | Self::Order { .. }
            | Self::CreateOrder
            | Self::UpdateOrder { .. }
            | Self::OrderDocument { .. }
            | Self::Device { .. }
            | Self::UpdateDevice { .. }
            | Self::MyActiveWork
            | Self::DeviceTypes
            | Self::Client { .. }
            | Self::Ticket { .. }
            | Self::TicketMessages { .. }
            | Self::SendTicketMessage { .. }
            | Self::Enquiry { .. }
            | Self::EnquiryListStats
            | Self::EnquiryMessages { .. }
            | Self::EnquiryReply { .. }
            | Self::MarkEnquiryRead { .. }
            | Self::ArchiveEnquiry { .. }
            | Self::MarkEnquirySpam { .. }
            | Self::ConvertEnquiry { .. }
            | Self::UserSettings
            | Self::UpdateUserSettings
            | Self::RegisterDeviceToken
            | Self::UnregisterDeviceToken
            | Self::PushPreferences
            | Self::UpdatePushPreferences
            | Self::Locations
            | Self::SetPasscode
            | Self::VerifyPasscode
            | Self::ChangePasscode
            | Self::ResetPasscodeRequest
            | Self::ResetPasscode
            | Self::TogglePasscodeEnabled
            | Self::PasscodeTimeout
            | Self::Macros
            | Self::ExecuteMacro { .. }
            | Self::CancelMacroExecution { .. }
            | Self::PaymentLinks { .. }
            | Self::CreatePaymentLink
            | Self::CancelPaymentLink { .. }
            | Self::CustomerMagicLinkRequest
            | Self::CustomerVerifyCode
            | Self::CustomerLogout
            | Self::CustomerOrder { .. }
            | Self::CustomerOrderTimeline { .. }
            | Self::CustomerOrderQuote { .. }
            | Self::CustomerApproveQuote { .. }
            | Self::CustomerRejectQuote { .. }
            | Self::CustomerEnquiry { .. }
            | Self::CustomerSubmitEnquiry
            | Self::CustomerEnquiryReply { .. }
            | Self::CustomerShops
            | Self::CustomerConversations
            | Self::CustomerOrderMessages { .. }
            | Self::CustomerSendMessage { .. }
            | Self::CompanyPublicInfo { .. }
            | Self::SubmitLead { .. } => Vec::new(),
        }
    }

    /// Whether the request carries a bearer token and may trigger a refresh
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        match self {
            Self::Login
            | Self::TwoFactorRequest
            | Self::TwoFactorVerify
            | Self::MagicLinkRequest
            | Self::MagicLinkVerifyCode
            | Self::RefreshToken
            | Self::CustomerMagicLinkRequest
            | Self::CustomerVerifyCode
            | Self::CompanyPublicInfo { .. }
            | Self::SubmitLead { .. } => false,

            Self::Me
            | Self::Logout
            | Self::DashboardStats { .. }
            | Self::EnquiryStats { .. }
            | Self::CategoryBreakdown { .. }
            | Self::Orders(_)
            | Self::Order { .. }
            | Self::CreateOrder
            | Self::UpdateOrder { .. }
            | Self::OrderDocument { .. }
            | Self::Devices(_)
            | Self::Device { .. }
            | Self::UpdateDevice { .. }
            | Self::MyQueue(_)
            | Self::MyActiveWork
            | Self::DeviceTypes
            | Self::Clients { .. }
            | Self::Client { .. }
            | Self::ClientOrders { .. }
            | Self::Tickets { .. }
            | Self::Ticket { .. }
            | Self::TicketMessages { .. }
            | Self::SendTicketMessage { .. }
            | Self::Enquiries { .. }
            | Self::EnquiryListStats
            | Self::Enquiry { .. }
            | Self::EnquiryMessages { .. }
            | Self::EnquiryReply { .. }
            | Self::MarkEnquiryRead { .. }
            | Self::ArchiveEnquiry { .. }
            | Self::MarkEnquirySpam { .. }
            | Self::ConvertEnquiry { .. }
            | Self::LookupQr { .. }
            | Self::LookupBarcode { .. }
            | Self::UserSettings
            | Self::UpdateUserSettings
            | Self::RegisterDeviceToken
            | Self::UnregisterDeviceToken
            | Self::PushPreferences
            | Self::UpdatePushPreferences
            | Self::Locations
            | Self::SetPasscode
            | Self::VerifyPasscode
            | Self::ChangePasscode
            | Self::ResetPasscodeRequest
            | Self::ResetPasscode
            | Self::TogglePasscodeEnabled
            | Self::PasscodeTimeout
            | Self::Macros
            | Self::ExecuteMacro { .. }
            | Self::CancelMacroExecution { .. }
            | Self::Buyback(_)
            | Self::PaymentLinks { .. }
            | Self::CreatePaymentLink
            | Self::CancelPaymentLink { .. }
            | Self::CustomerLogout
            | Self::CustomerOrders { .. }
            | Self::CustomerOrder { .. }
            | Self::CustomerOrderTimeline { .. }
            | Self::CustomerOrderQuote { .. }
            | Self::CustomerApproveQuote { .. }
            | Self::CustomerRejectQuote { .. }
            | Self::CustomerEnquiries { .. }
            | Self::CustomerEnquiry { .. }
            | Self::CustomerSubmitEnquiry
            | Self::CustomerEnquiryReply { .. }
            | Self::CustomerShops
            | Self::CustomerConversations
            | Self::CustomerOrderMessages { .. }
            | Self::CustomerSendMessage { .. } => true,
        }
    }

    /// `"METHOD /path"`, used as the span label for a request
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.method(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn id() -> String {
        "abc123".to_string()
    }

    /// One instance of every variant
    fn catalog() -> Vec<Endpoint> {
        use Endpoint::*;
        vec![
            Login,
            TwoFactorRequest,
            TwoFactorVerify,
            MagicLinkRequest,
            MagicLinkVerifyCode,
            RefreshToken,
            Me,
            Logout,
            DashboardStats { scope: StatsScope::User, period: DatePeriod::ThisMonth },
            EnquiryStats { scope: StatsScope::Company, include_breakdown: false },
            CategoryBreakdown { scope: StatsScope::User, period: DatePeriod::Today },
            Orders(OrderListQuery::default()),
            Order { id: id() },
            CreateOrder,
            UpdateOrder { id: id() },
            OrderDocument { order_id: id(), kind: DocumentKind::Invoice },
            Devices(DeviceListQuery::default()),
            Device { id: id() },
            UpdateDevice { id: id() },
            MyQueue(QueueQuery::default()),
            MyActiveWork,
            DeviceTypes,
            Clients { page: PageRequest::default(), search: None },
            Client { id: id() },
            ClientOrders { id: id(), page: PageRequest::default() },
            Tickets { page: PageRequest::default(), status: None },
            Ticket { id: id() },
            TicketMessages { id: id() },
            SendTicketMessage { id: id() },
            Enquiries { page: PageRequest::default(), status: None },
            EnquiryListStats,
            Enquiry { id: id() },
            EnquiryMessages { id: id() },
            EnquiryReply { id: id() },
            MarkEnquiryRead { id: id() },
            ArchiveEnquiry { id: id() },
            MarkEnquirySpam { id: id() },
            ConvertEnquiry { id: id() },
            LookupQr { code: "QR-1".into() },
            LookupBarcode { barcode: "5012345678900".into() },
            UserSettings,
            UpdateUserSettings,
            RegisterDeviceToken,
            UnregisterDeviceToken,
            PushPreferences,
            UpdatePushPreferences,
            Locations,
            SetPasscode,
            VerifyPasscode,
            ChangePasscode,
            ResetPasscodeRequest,
            ResetPasscode,
            TogglePasscodeEnabled,
            PasscodeTimeout,
            Macros,
            ExecuteMacro { id: id() },
            CancelMacroExecution { id: id() },
            Buyback(BuybackQuery::default()),
            PaymentLinks { order_id: id() },
            CreatePaymentLink,
            CancelPaymentLink { link_id: id() },
            CustomerMagicLinkRequest,
            CustomerVerifyCode,
            CustomerLogout,
            CustomerOrders { page: PageRequest::default() },
            CustomerOrder { id: id() },
            CustomerOrderTimeline { id: id() },
            CustomerOrderQuote { order_id: id() },
            CustomerApproveQuote { order_id: id() },
            CustomerRejectQuote { order_id: id() },
            CustomerEnquiries { page: PageRequest::default() },
            CustomerEnquiry { id: id() },
            CustomerSubmitEnquiry,
            CustomerEnquiryReply { id: id() },
            CustomerShops,
            CustomerConversations,
            CustomerOrderMessages { order_id: id() },
            CustomerSendMessage { order_id: id() },
            CompanyPublicInfo { slug: "acme".into() },
            SubmitLead { slug: "acme".into() },
        ]
    }

    #[test]
    fn every_endpoint_has_a_distinct_route() {
        let catalog = catalog();
        let routes: HashSet<_> = catalog.iter().map(|e| (e.method(), e.path())).collect();
        assert_eq!(routes.len(), catalog.len());
    }

    #[test]
    fn every_path_is_rooted_under_api() {
        for endpoint in catalog() {
            assert!(endpoint.path().starts_with("/api/"), "{endpoint:?}");
        }
    }

    #[test]
    fn only_the_public_set_skips_auth() {
        let public: Vec<_> = catalog().into_iter().filter(|e| !e.requires_auth()).collect();
        assert_eq!(
            public,
            vec![
                Endpoint::Login,
                Endpoint::TwoFactorRequest,
                Endpoint::TwoFactorVerify,
                Endpoint::MagicLinkRequest,
                Endpoint::MagicLinkVerifyCode,
                Endpoint::RefreshToken,
                Endpoint::CustomerMagicLinkRequest,
                Endpoint::CustomerVerifyCode,
                Endpoint::CompanyPublicInfo { slug: "acme".into() },
                Endpoint::SubmitLead { slug: "acme".into() },
            ]
        );
    }

    #[test]
    fn refresh_is_an_unauthenticated_post() {
        assert_eq!(Endpoint::RefreshToken.method(), HttpMethod::Post);
        assert_eq!(Endpoint::RefreshToken.path(), "/api/auth/refresh");
        assert!(!Endpoint::RefreshToken.requires_auth());
    }

    #[test]
    fn identifiers_are_embedded_in_paths() {
        assert_eq!(Endpoint::Order { id: "o-9".into() }.path(), "/api/orders/o-9");
        assert_eq!(
            Endpoint::OrderDocument { order_id: "o-9".into(), kind: DocumentKind::JobSheet }
                .path(),
            "/api/orders/o-9/documents/job_sheet"
        );
        assert_eq!(
            Endpoint::CustomerApproveQuote { order_id: "o-9".into() }.path(),
            "/api/customer/orders/o-9/approve-quote"
        );
    }

    #[test]
    fn unfiltered_lists_send_only_paging() {
        let tickets = Endpoint::Tickets { page: PageRequest::new(2, 20), status: None };
        assert_eq!(
            tickets.query(),
            vec![("page".to_string(), "2".to_string()), ("limit".to_string(), "20".to_string())]
        );

        let clients = Endpoint::Clients { page: PageRequest::default(), search: Some(String::new()) };
        assert_eq!(clients.query().len(), 2);
    }

    #[test]
    fn enquiry_inbox_stats_are_separate_from_dashboard_stats() {
        let inbox = Endpoint::EnquiryListStats;
        assert_eq!(inbox.label(), "GET /api/enquiries/stats");
        assert!(inbox.requires_auth());
        assert!(inbox.query().is_empty());

        let dashboard =
            Endpoint::EnquiryStats { scope: StatsScope::Company, include_breakdown: false };
        assert_ne!(inbox.path(), dashboard.path());
    }

    #[test]
    fn include_breakdown_is_omitted_when_false() {
        let off = Endpoint::EnquiryStats { scope: StatsScope::User, include_breakdown: false };
        assert_eq!(off.query(), vec![("scope".to_string(), "user".to_string())]);

        let on = Endpoint::EnquiryStats { scope: StatsScope::User, include_breakdown: true };
        assert!(on.query().contains(&("include_breakdown".to_string(), "true".to_string())));
    }

    #[test]
    fn no_query_ever_carries_an_empty_value() {
        for endpoint in catalog() {
            for (key, value) in endpoint.query() {
                assert!(!value.is_empty(), "{key} empty in {endpoint:?}");
                assert_ne!(value, "false", "{key} rendered false in {endpoint:?}");
            }
        }
    }

    #[test]
    fn label_combines_method_and_path() {
        assert_eq!(Endpoint::UnregisterDeviceToken.label(), "DELETE /api/user/device-token");
    }
}
