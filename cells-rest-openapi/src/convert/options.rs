/// How far the converter may stretch a raw value to fit the declared type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coercion {
    /// The JSON type must match the declared type.
    Strict,
    /// Booleans also read numbers (zero is false) and the strings `true`,
    /// `false`, `1`, `0` or empty. Numbers also read numeric strings and
    /// booleans, strings also read numbers and booleans. Anything else is
    /// still rejected.
    Lenient,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    pub coercion: Coercion,
}

/// `ConvertOptions` implements `Default`
impl ::std::default::Default for ConvertOptions {
    fn default() -> Self {
        Self {
            coercion: Coercion::Strict,
        }
    }
}

impl ConvertOptions {
    pub fn strict() -> ConvertOptions {
        ConvertOptions {
            coercion: Coercion::Strict,
        }
    }

    pub fn lenient() -> ConvertOptions {
        ConvertOptions {
            coercion: Coercion::Lenient,
        }
    }

    pub fn is_lenient(&self) -> bool {
        self.coercion == Coercion::Lenient
    }
}
