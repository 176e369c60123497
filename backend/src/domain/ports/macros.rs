//! `define_port_error!` declares a port's failure enum. Every variant carries
//! the adapter's `message` and renders as `"<prefix>: <message>"`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $prefix:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error("{prefix}: {message}", prefix = $prefix)]
                $variant { message: String },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum MailboxError {
            Unreachable => "mailbox unreachable",
            QuotaExceeded => "mailbox over quota",
        }
    }

    #[test]
    fn constructors_are_snake_case_and_accept_str() {
        let err = MailboxError::quota_exceeded("5 GiB used");
        assert_eq!(
            err,
            MailboxError::QuotaExceeded {
                message: "5 GiB used".to_owned()
            }
        );
    }

    #[test]
    fn messages_are_prefixed() {
        let err = MailboxError::unreachable(String::from("dns failure"));
        assert_eq!(err.to_string(), "mailbox unreachable: dns failure");
    }
}
