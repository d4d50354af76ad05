#[cfg(test)]
pub mod test {
    use serde::{Deserialize, Serialize};

    use crate::opt::{OptBool, OptDuration, OptInt, OptString, OptStringList, OptUrlAbsolute};
    use crate::ConfigStruct;

    #[derive(Default, Debug, ConfigStruct)]
    pub struct Flat {
        #[conf("OPT")]
        pub opt: OptBool,

        #[conf("REQ_OPT,required")]
        pub required_opt: OptBool,

        #[conf("REQ_INT,required")]
        pub required_int: i32,

        pub untagged: String,

        // Not public, so never walked even though it is tagged.
        #[conf("HIDDEN,required")]
        pub(crate) hidden: OptInt,
    }

    #[derive(Default, Debug, ConfigStruct)]
    pub struct Deeper {
        #[conf("FLAG,required")]
        pub flag: bool,
    }

    #[derive(Default, Debug, ConfigStruct)]
    pub struct Inner {
        #[conf("INT,required")]
        pub int: OptInt,

        pub deeper: Deeper,
    }

    #[derive(Default, Debug, ConfigStruct)]
    pub struct Outer {
        #[conf("TOP,required")]
        pub top: OptInt,

        pub nested: Inner,

        #[conf("LAST,required")]
        pub last: String,
    }

    #[derive(Default, Debug, ConfigStruct)]
    pub struct BadTag {
        #[conf("BAD,sometimes")]
        pub bad: OptInt,

        #[conf("AFTER,required")]
        pub after: OptInt,
    }

    /// A nested struct given a variable name, which only validation accepts.
    #[derive(Default, Debug, ConfigStruct)]
    pub struct NamedNested {
        #[conf("X")]
        pub x: OptInt,

        #[conf("NESTED")]
        pub nested: Inner,
    }

    #[derive(Default, Debug, ConfigStruct)]
    pub struct WithSkipped {
        #[conf("ID,required")]
        pub id: OptInt,

        #[conf(skip)]
        pub raw: Vec<u8>,
    }

    /// Usable both as a tag-driven struct and as a serde config struct.
    #[derive(Default, Debug, PartialEq, ConfigStruct, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Service {
        #[conf("NAME")]
        pub name: OptString,

        #[conf("PORT")]
        pub port: u16,

        #[conf("TIMEOUT")]
        pub timeout: OptDuration,

        #[conf("TAGS")]
        pub tags: OptStringList,

        #[conf("ENDPOINT")]
        pub endpoint: OptUrlAbsolute,

        #[conf("VERBOSE")]
        pub verbose: OptBool,
    }

    #[test]
    fn service_loads_from_toml() {
        let service: Service = toml::from_str(
            r#"
            name = "svc"
            port = 8080
            timeout = "1m30s"
            tags = "one"
            endpoint = "https://example.com/api"
            "#,
        )
        .unwrap();
        assert_eq!(service.name, OptString::new("svc"));
        assert_eq!(service.port, 8080);
        assert_eq!(service.timeout, OptDuration::from_secs(90));
        assert_eq!(service.tags, OptStringList::new(["one"]));
        assert_eq!(
            service.endpoint.as_url().map(|u| u.as_str()),
            Some("https://example.com/api")
        );
        assert_eq!(service.verbose, OptBool::default());
    }

    #[test]
    fn service_rejects_bad_toml_values() {
        let err = toml::from_str::<Service>(r#"endpoint = "relative/path""#).unwrap_err();
        assert!(err.to_string().contains("must be an absolute URL/URI"), "{err}");

        let err = toml::from_str::<Service>(r#"verbose = "yes""#).unwrap_err();
        assert!(err.to_string().contains("not a valid boolean"), "{err}");
    }

    #[test]
    fn service_json_leaves_out_nothing() {
        let service = Service {
            name: OptString::new("svc"),
            tags: OptStringList::new(["a", "b"]),
            ..Service::default()
        };
        assert_eq!(
            serde_json::to_value(&service).unwrap(),
            serde_json::json!({
                "name": "svc",
                "port": 0,
                "timeout": null,
                "tags": ["a", "b"],
                "endpoint": null,
                "verbose": null,
            })
        );
        let back: Service = serde_json::from_value(serde_json::to_value(&service).unwrap()).unwrap();
        assert_eq!(back, service);
    }
}
