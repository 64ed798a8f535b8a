//! # Configuration Recipes
//!
//! Server-side valuation configuration: where market data comes from
//! ([`MarketContext`]) and which pricing models apply ([`PricingContext`]).
//!
//! # Examples
//!
//! ```
//! use meridian_sdk::models::recipe::{ConfigurationRecipe, MarketDataKeyRule, PricingModel};
//!
//! let recipe = ConfigurationRecipe::new("Finbourne", "mid-quotes")
//!     .with_market_rule(MarketDataKeyRule::equity_mid("DataVendor", "Finbourne"))
//!     .with_default_model(PricingModel::SimpleStatic);
//!
//! assert_eq!(recipe.market.market_rules.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Pricing models the platform can apply to an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PricingModel {
    /// Mark to the latest quote; no model-based present value.
    #[default]
    SimpleStatic,
    /// Discount projected cashflows on the configured curves.
    Discounting,
    /// Discount a single payoff at a flat time value of money.
    ConstantTimeValueOfMoney,
    /// Black-Scholes for optionality.
    BlackScholes,
}

impl PricingModel {
    /// Returns the model name as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SimpleStatic => "SimpleStatic",
            Self::Discounting => "Discounting",
            Self::ConstantTimeValueOfMoney => "ConstantTimeValueOfMoney",
            Self::BlackScholes => "BlackScholes",
        }
    }
}

/// A rule resolving one class of market data lookup to a supplier and scope.
///
/// The `key` is a wildcard pattern over quote addresses, e.g.
/// `Quote.Figi.*` or `Fx.CurrencyPair.*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDataKeyRule {
    /// Address pattern this rule matches.
    pub key: String,
    /// Data supplier to resolve against.
    pub supplier: String,
    /// Scope the data was upserted into.
    pub data_scope: String,
    /// Kind of quote to look up.
    pub quote_type: String,
    /// Field to read, e.g. `mid`.
    pub field: String,
    /// How far back from the valuation date a quote may be taken, e.g. `5D`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_interval: Option<String>,
}

impl MarketDataKeyRule {
    /// Rule resolving equity quotes by FIGI to mid prices.
    #[must_use]
    pub fn equity_mid(supplier: impl Into<String>, data_scope: impl Into<String>) -> Self {
        Self {
            key: "Quote.Figi.*".to_string(),
            supplier: supplier.into(),
            data_scope: data_scope.into(),
            quote_type: "Price".to_string(),
            field: "mid".to_string(),
            quote_interval: Some("5D.0D".to_string()),
        }
    }

    /// Rule resolving quotes by client-internal id to mid prices.
    #[must_use]
    pub fn client_internal_mid(supplier: impl Into<String>, data_scope: impl Into<String>) -> Self {
        Self {
            key: "Quote.ClientInternal.*".to_string(),
            supplier: supplier.into(),
            data_scope: data_scope.into(),
            quote_type: "Price".to_string(),
            field: "mid".to_string(),
            quote_interval: Some("5D.0D".to_string()),
        }
    }

    /// Rule resolving FX rates for currency pairs.
    #[must_use]
    pub fn fx_mid(supplier: impl Into<String>, data_scope: impl Into<String>) -> Self {
        Self {
            key: "Fx.CurrencyPair.*".to_string(),
            supplier: supplier.into(),
            data_scope: data_scope.into(),
            quote_type: "Rate".to_string(),
            field: "mid".to_string(),
            quote_interval: Some("5D.0D".to_string()),
        }
    }

    /// Rule resolving discount curves for a currency.
    #[must_use]
    pub fn rates_curve(supplier: impl Into<String>, data_scope: impl Into<String>) -> Self {
        Self {
            key: "Rates.*.*".to_string(),
            supplier: supplier.into(),
            data_scope: data_scope.into(),
            quote_type: "Price".to_string(),
            field: "mid".to_string(),
            quote_interval: None,
        }
    }
}

/// Market data resolution options applied when no rule matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOptions {
    /// Supplier used when no rule names one.
    pub default_supplier: String,
    /// Scope used when no rule names one.
    pub default_scope: String,
    /// Whether missing FX rates may be inferred by triangulation.
    pub attempt_to_infer_missing_fx: bool,
}

impl Default for MarketOptions {
    fn default() -> Self {
        Self {
            default_supplier: "DataVendor".to_string(),
            default_scope: "default".to_string(),
            attempt_to_infer_missing_fx: true,
        }
    }
}

/// Market data configuration within a recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketContext {
    /// Lookup rules, tried in order.
    #[serde(default)]
    pub market_rules: Vec<MarketDataKeyRule>,
    /// Fallback options.
    #[serde(default)]
    pub options: MarketOptions,
}

/// Binds a pricing model to the instrument types it prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorModelRule {
    /// Model vendor, `Meridian` for built-in models.
    pub supplier: String,
    /// The model to apply.
    pub model_name: PricingModel,
    /// Instrument type the rule applies to, `*` for all.
    pub instrument_type: String,
}

/// Pricing configuration within a recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingContext {
    /// Model selection rules, tried in order.
    #[serde(default)]
    pub model_rules: Vec<VendorModelRule>,
}

/// A named, scoped valuation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRecipe {
    /// Owning scope.
    pub scope: String,
    /// Recipe code, unique within the scope.
    pub code: String,
    /// Market data configuration.
    #[serde(default)]
    pub market: MarketContext,
    /// Pricing configuration.
    #[serde(default)]
    pub pricing: PricingContext,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ConfigurationRecipe {
    /// Creates an empty recipe.
    #[must_use]
    pub fn new(scope: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            code: code.into(),
            market: MarketContext::default(),
            pricing: PricingContext::default(),
            description: None,
        }
    }

    /// Appends a market data rule.
    #[must_use]
    pub fn with_market_rule(mut self, rule: MarketDataKeyRule) -> Self {
        self.market.market_rules.push(rule);
        self
    }

    /// Appends a model rule applying to all instrument types.
    #[must_use]
    pub fn with_default_model(mut self, model: PricingModel) -> Self {
        self.pricing.model_rules.push(VendorModelRule {
            supplier: "Meridian".to_string(),
            model_name: model,
            instrument_type: "*".to_string(),
        });
        self
    }

    /// Appends a model rule for one instrument type.
    #[must_use]
    pub fn with_model_for(mut self, instrument_type: impl Into<String>, model: PricingModel) -> Self {
        self.pricing.model_rules.push(VendorModelRule {
            supplier: "Meridian".to_string(),
            model_name: model,
            instrument_type: instrument_type.into(),
        });
        self
    }
}

/// Request wrapper for recipe upserts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertRecipeRequest {
    /// The recipe to store.
    pub configuration_recipe: ConfigurationRecipe,
}
