use serde::{Deserialize, Serialize};

/// Registration details parsed from a WHOIS response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoisRecord {
    /// Domain name as reported by the registry
    pub domain_name: Option<String>,
    /// Registrar name
    pub registrar: Option<String>,
    /// Registrar WHOIS server
    pub whois_server: Option<String>,
    /// Domain creation date
    pub creation_date: Option<String>,
    /// Last update date
    pub updated_date: Option<String>,
    /// Domain expiration date
    pub expiration_date: Option<String>,
    /// Name servers, lower-cased and de-duplicated
    pub name_servers: Vec<String>,
    /// Domain status codes
    pub status: Vec<String>,
    /// Contact email addresses
    pub emails: Vec<String>,
    /// DNSSEC state
    pub dnssec: Option<String>,
    /// Registrant organization
    pub org: Option<String>,
    /// Registrant country
    pub country: Option<String>,
    /// Raw WHOIS response
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw: String,
}

impl WhoisRecord {
    /// Parse a raw WHOIS response.
    ///
    /// Understands single-line `key: value` pairs as well as a header line
    /// followed by more-indented value lines. For single-valued fields the
    /// first occurrence wins; list fields accumulate.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut record = Self {
            raw: raw.to_string(),
            ..Self::default()
        };

        // Indentation and field of the header whose values follow
        let mut block: Option<(usize, Option<Field>)> = None;

        for raw_line in raw.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                block = None;
                continue;
            }
            if line.starts_with('%') || line.starts_with('#') || line.starts_with(">>>") {
                continue;
            }
            let indent = raw_line.len() - raw_line.trim_start().len();

            if let Some((header_indent, header)) = block {
                if indent > header_indent {
                    match split_pair(line) {
                        Some((key, value)) if !value.is_empty() => {
                            if let Some(field) = Field::from_key(&key).or(header) {
                                record.apply(field, value);
                            }
                        }
                        Some(_) => {}
                        None => {
                            if let Some(field) = header {
                                record.apply(field, line);
                            }
                        }
                    }
                    continue;
                }
                block = None;
            }

            let Some((key, value)) = split_pair(line) else {
                continue;
            };
            let field = Field::from_key(&key);
            if value.is_empty() {
                block = Some((indent, field));
            } else if let Some(field) = field {
                record.apply(field, value);
            }
        }

        record
    }

    fn apply(&mut self, field: Field, value: &str) {
        match field {
            Field::DomainName => set_once(&mut self.domain_name, value),
            Field::Registrar => set_once(&mut self.registrar, value),
            Field::WhoisServer => set_once(&mut self.whois_server, value),
            Field::CreationDate => set_once(&mut self.creation_date, value),
            Field::UpdatedDate => set_once(&mut self.updated_date, value),
            Field::ExpirationDate => set_once(&mut self.expiration_date, value),
            Field::NameServer => push_unique(&mut self.name_servers, value.to_lowercase()),
            Field::Status => push_unique(&mut self.status, value.to_string()),
            Field::Email => push_unique(&mut self.emails, value.to_lowercase()),
            Field::Dnssec => set_once(&mut self.dnssec, value),
            Field::Org => set_once(&mut self.org, value),
            Field::Country => set_once(&mut self.country, value),
        }
    }

    /// Populated fields in display order, list values joined with `, `
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let singles = [
            ("domain_name", &self.domain_name),
            ("registrar", &self.registrar),
            ("whois_server", &self.whois_server),
            ("creation_date", &self.creation_date),
            ("updated_date", &self.updated_date),
            ("expiration_date", &self.expiration_date),
        ];
        let lists = [
            ("name_servers", &self.name_servers),
            ("status", &self.status),
            ("emails", &self.emails),
        ];
        let trailing = [
            ("dnssec", &self.dnssec),
            ("org", &self.org),
            ("country", &self.country),
        ];

        let mut fields = Vec::new();
        for (name, value) in singles {
            if let Some(value) = value {
                fields.push((name, value.clone()));
            }
        }
        for (name, values) in lists {
            if !values.is_empty() {
                fields.push((name, values.join(", ")));
            }
        }
        for (name, value) in trailing {
            if let Some(value) = value {
                fields.push((name, value.clone()));
            }
        }
        fields
    }
}

#[derive(Debug, Clone, Copy)]
enum Field {
    DomainName,
    Registrar,
    WhoisServer,
    CreationDate,
    UpdatedDate,
    ExpirationDate,
    NameServer,
    Status,
    Email,
    Dnssec,
    Org,
    Country,
}

impl Field {
    /// Map a lower-cased WHOIS key to the field it fills
    fn from_key(key: &str) -> Option<Self> {
        let field = match key {
            "domain name" | "domain" => Self::DomainName,
            "registrar" | "sponsoring registrar" | "registrar name" => Self::Registrar,
            "registrar whois server" | "whois server" | "whois" => Self::WhoisServer,
            "creation date" | "created" | "created on" | "registered" | "registered on"
            | "registration time" => Self::CreationDate,
            "updated date" | "last updated" | "last modified" | "changed" => Self::UpdatedDate,
            "registry expiry date"
            | "registrar registration expiration date"
            | "expiration date"
            | "expiry date"
            | "expires"
            | "paid-till" => Self::ExpirationDate,
            "name server" | "name servers" | "nserver" | "nameserver" | "nameservers"
            | "domain nameservers" => Self::NameServer,
            "domain status" | "status" => Self::Status,
            "registrant organization" | "org" | "organisation" => Self::Org,
            "registrant country" | "country" => Self::Country,
            "dnssec" => Self::Dnssec,
            _ if key.contains("email") => Self::Email,
            _ => return None,
        };
        Some(field)
    }
}

/// Split `key: value`, lower-casing the key.
///
/// The colon must end the line or be followed by whitespace, so URLs and
/// IPv6 addresses are not mistaken for keys.
fn split_pair(line: &str) -> Option<(String, &str)> {
    let (key, value) = line.split_once(':')?;
    if !value.is_empty() && !value.starts_with(char::is_whitespace) {
        return None;
    }
    Some((key.trim().to_lowercase(), value.trim()))
}

fn set_once(slot: &mut Option<String>, value: &str) {
    if slot.is_none() {
        *slot = Some(value.to_string());
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
   Domain Name: EXAMPLE.COM
   Registry Domain ID: 2336799_DOMAIN_COM-VRSN
   Registrar WHOIS Server: whois.iana.org
   Updated Date: 2024-08-14T07:01:34Z
   Creation Date: 1995-08-14T04:00:00Z
   Registry Expiry Date: 2025-08-13T04:00:00Z
   Registrar: RESERVED-Internet Assigned Numbers Authority
   Registrar Abuse Contact Email: abuse@iana.org
   Domain Status: clientDeleteProhibited
   Domain Status: clientTransferProhibited
   Name Server: A.IANA-SERVERS.NET
   Name Server: B.IANA-SERVERS.NET
   DNSSEC: signedDelegation
>>> Last update of whois database: 2024-09-01T00:00:00Z <<<
% comment: ignored
";

    #[test]
    fn parses_verisign_style_response() {
        let record = WhoisRecord::parse(SAMPLE);
        assert_eq!(record.domain_name.as_deref(), Some("EXAMPLE.COM"));
        assert_eq!(
            record.registrar.as_deref(),
            Some("RESERVED-Internet Assigned Numbers Authority")
        );
        assert_eq!(record.whois_server.as_deref(), Some("whois.iana.org"));
        assert_eq!(record.creation_date.as_deref(), Some("1995-08-14T04:00:00Z"));
        assert_eq!(record.expiration_date.as_deref(), Some("2025-08-13T04:00:00Z"));
        assert_eq!(record.name_servers, ["a.iana-servers.net", "b.iana-servers.net"]);
        assert_eq!(record.status.len(), 2);
        assert_eq!(record.emails, ["abuse@iana.org"]);
        assert_eq!(record.dnssec.as_deref(), Some("signedDelegation"));
    }

    #[test]
    fn first_value_wins_for_single_fields() {
        let record = WhoisRecord::parse("Registrar: First\nRegistrar: Second\n");
        assert_eq!(record.registrar.as_deref(), Some("First"));
    }

    #[test]
    fn fields_skip_empty_values() {
        let record = WhoisRecord {
            registrar: Some("Example Registrar".into()),
            name_servers: vec!["ns1.example.com".into(), "ns2.example.com".into()],
            ..WhoisRecord::default()
        };
        assert_eq!(
            record.fields(),
            [
                ("registrar", "Example Registrar".to_string()),
                ("name_servers", "ns1.example.com, ns2.example.com".to_string()),
            ]
        );
    }

    const NOMINET: &str = "
    Domain name:
        example.co.uk

    Registrar:
        Nominet UK [Tag = NOMINET]
        URL: https://www.nominet.uk

    Relevant dates:
        Registered on: 26-Nov-1996
        Expiry date:  26-Nov-2030
        Last updated:  10-Oct-2024

    Registration status:
        No registration status listed.

    Name servers:
        NS1.EXAMPLE.CO.UK
        ns2.example.co.uk   2001:db8::53

    WHOIS lookup made at 10:00:00 26-Nov-2024
";

    #[test]
    fn parses_indented_blocks() {
        let record = WhoisRecord::parse(NOMINET);
        assert_eq!(record.domain_name.as_deref(), Some("example.co.uk"));
        assert_eq!(record.registrar.as_deref(), Some("Nominet UK [Tag = NOMINET]"));
        assert_eq!(record.creation_date.as_deref(), Some("26-Nov-1996"));
        assert_eq!(record.expiration_date.as_deref(), Some("26-Nov-2030"));
        assert_eq!(record.updated_date.as_deref(), Some("10-Oct-2024"));
        assert_eq!(
            record.name_servers,
            ["ns1.example.co.uk", "ns2.example.co.uk   2001:db8::53"]
        );
        assert!(record.status.is_empty());
    }

    #[test]
    fn nested_block_keys_use_their_own_field() {
        let raw = "\
Domain: example.eu

Registrar:
        Name: EURid vzw
        Website: https://www.eurid.eu

Name servers:
        ns1.example.eu
        ns2.example.eu
";
        let record = WhoisRecord::parse(raw);
        assert_eq!(record.domain_name.as_deref(), Some("example.eu"));
        assert_eq!(record.registrar.as_deref(), Some("EURid vzw"));
        assert_eq!(record.name_servers, ["ns1.example.eu", "ns2.example.eu"]);
    }

    #[test]
    fn blank_value_at_same_indent_is_not_a_block() {
        let raw = "   Registrant Name:\n   Registrant Country: NL\n";
        let record = WhoisRecord::parse(raw);
        assert_eq!(record.country.as_deref(), Some("NL"));
    }

    #[test]
    fn empty_response_has_no_fields() {
        assert!(WhoisRecord::parse("No match for \"NOPE.TEST\".").fields().is_empty());
    }
}
