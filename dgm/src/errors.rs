// Create the Error, ErrorKind, ResultExt, and Result types
error_chain! {
    foreign_links {
        Json(::serde_json::Error);
    }

    errors {
        NotImplemented(what: String) {
            description("not implemented")
            display("not implemented: {}", what)
        }
        UnknownProperty(key: String) {
            description("unknown property")
            display("unknown property: {}", key)
        }
        MalformedProperty(text: String) {
            description("malformed property")
            display("malformed property: {}", text)
        }
        InvalidModel(reason: String) {
            description("invalid model")
            display("invalid model: {}", reason)
        }
        InvalidFactor(reason: String) {
            description("invalid factor")
            display("invalid factor: {}", reason)
        }
        UnknownVariable(var: String) {
            description("variable is not part of the factor graph")
            display("variable {} is not part of the factor graph", var)
        }
        BeliefNotAvailable(vars: String) {
            description("belief not available")
            display("belief of {} is not available: no factor covers it", vars)
        }
        UnknownAlgorithm(name: String) {
            description("unknown inference algorithm")
            display("unknown inference algorithm: {}", name)
        }
    }
}
