use crate::constants::USAGE;

error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Clap(::clap::Error);
        Pickle(::serde_pickle::Error);
    }

    errors {
        InvalidInputLength(spacer: usize, protospacer: usize, pam: usize) {
            description("incorrect input sequence length")
            display(
                "Incorrect input sequence length (spacer {}, protospacer {}, PAM {})\nUsage: {}",
                spacer, protospacer, pam, USAGE
            )
        }

        ScoreTablesUnavailable(path: String) {
            description("score table could not be loaded")
            display("could not load score table {:?}", path)
        }

        MissingScoreKey(key: String) {
            description("key not found in score table")
            display("no score for {:?} in score table", key)
        }

        UnrecognizedSymbol(symbol: char) {
            description("unrecognized nucleotide symbol")
            display("unrecognized nucleotide symbol {:?}", symbol)
        }
    }
}
