use chrono::NaiveDate;
use mt940_statements::description::{Bank, Description, FieldValue, Fields};
use mt940_statements::{
    abn_amro_description, ing_description, rabo_description, regiobank_description, Balance,
    Error, Mt940,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn amount(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn fixture(name: &str) -> Mt940 {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name);
    Mt940::from_path(path).unwrap()
}

#[test]
fn test_single_statement_file() {
    let mt940 = fixture("MT940.txt");
    assert_eq!(mt940.statements.len(), 1);

    let statement = &mt940.statements[0];
    assert_eq!(statement.statement_id, "940S120514");
    assert_eq!(statement.account, "123456789");
    assert_eq!(statement.information, "13501/1");
    assert_eq!(
        statement.start_balance,
        Some(Balance {
            date: date(2012, 5, 11),
            amount: amount("5138.61"),
            currency: "EUR".to_string(),
        })
    );
    assert_eq!(
        statement.end_balance,
        Some(Balance {
            date: date(2012, 5, 14),
            amount: amount("5638.62"),
            currency: "EUR".to_string(),
        })
    );
    assert_eq!(statement.description, None);

    let [transaction] = statement.transactions.as_slice() else {
        panic!("expected exactly one transaction");
    };
    assert_eq!(transaction.date, date(2012, 5, 12));
    assert_eq!(transaction.booking, Some(date(2012, 5, 14)));
    assert_eq!(transaction.amount, amount("500.01"));
    assert_eq!(transaction.id, "N654");
    assert_eq!(transaction.reference, "NONREF");
    assert_eq!(transaction.institution_reference, "");
    assert_eq!(transaction.additional_data.as_deref(), Some("987654321"));
    assert_eq!(
        transaction.description,
        "/TRTP/SEPA OVERBOEKING/IBAN/FR12345678901234/BIC/GEFRADAM\n\
         /NAME/QASD JGRED/REMI/Dit zijn de omschrijvingsregels/EREF/NOTPRO\n\
         VIDED"
    );

    let decoded = abn_amro_description(&transaction.description);
    assert_eq!(decoded["iban"], "FR12345678901234");
    assert_eq!(decoded["eref"], "NOTPROVIDED");
}

#[test]
fn test_minimal_statement_from_text() {
    let text = ":20:STMT1\n:25:123456789\n:28C:13501/1\n:60F:C120511EUR5138,61\n:61:1205120514C500,01N654NONREF\n:86:note\n:62F:C120514EUR5638,62\n";
    let mt940 = Mt940::parse_str(text).unwrap();
    let statement = &mt940.statements[0];
    assert_eq!(statement.statement_id, "STMT1");
    assert_eq!(statement.transactions.len(), 1);
    assert_eq!(statement.transactions[0].description, "note");
    assert_eq!(statement.transactions[0].additional_data, None);
    assert_eq!(statement.end_balance.as_ref().map(|b| b.amount), Some(amount("5638.62")));
}

#[test]
fn test_multiple_statements() {
    let mt940 = fixture("multi.sta");
    assert_eq!(mt940.statements.len(), 2);

    let first = &mt940.statements[0];
    assert_eq!(first.statement_id, "STMT1");
    assert_eq!(first.start_balance.as_ref().map(|b| b.amount), Some(amount("-100.00")));
    assert_eq!(first.description.as_deref(), Some("closing note"));
    assert_eq!(first.transactions.len(), 2);

    let payment = &first.transactions[0];
    assert_eq!(payment.amount, amount("-25.50"));
    assert_eq!(payment.booking, None);
    assert_eq!(payment.reference, "INV-1");
    assert_eq!(payment.institution_reference, "RB1");
    assert_eq!(payment.additional_data, None);
    assert_eq!(
        rabo_description(&payment.description),
        Fields::from([
            ("eref", "INV-1".to_string()),
            ("benm", String::new()),
            ("name", "Shop BV".to_string()),
            ("remi", "Invoice 1".to_string()),
        ])
    );

    let reversal = &first.transactions[1];
    assert_eq!(reversal.amount, amount("-5.00"));
    assert_eq!(reversal.booking, Some(date(2015, 1, 3)));
    assert_eq!(reversal.id, "NRTI");
    assert_eq!(reversal.reference, "");
    assert_eq!(reversal.additional_data.as_deref(), Some(""));
    assert_eq!(reversal.description, "");

    let second = &mt940.statements[1];
    assert_eq!(second.statement_id, "STMT2");
    assert_eq!(second.information, "2/1");
    assert!(second.transactions.is_empty());
    assert_eq!(second.description, None);
}

#[test]
fn test_from_read() {
    let text = b":20:A\n:25:1\n:20:B\n:25:2\n";
    let mt940 = Mt940::from_read(&mut &text[..]).unwrap();
    let accounts: Vec<&str> = mt940.statements.iter().map(|s| s.account.as_str()).collect();
    assert_eq!(accounts, vec!["1", "2"]);
}

#[test]
fn test_no_statements() {
    let mt940 = Mt940::parse_str("nothing to see here\n:99:unknown\n").unwrap();
    assert!(mt940.statements.is_empty());
}

#[test]
fn test_errors_propagate() {
    assert!(matches!(
        Mt940::parse_str(":20:A\n:60F:C12X511EUR1,00"),
        Err(Error::MalformedBalance(_))
    ));
    assert!(matches!(
        Mt940::parse_str(":20:A\n:62F:Z120511EUR1,00"),
        Err(Error::UnknownSign(_))
    ));
    assert!(matches!(
        Mt940::parse_str(":20:A\n:61:not a statement line"),
        Err(Error::MalformedTransaction(_))
    ));
}

#[test]
fn test_rabo_description() {
    assert_eq!(rabo_description("/EREF/foo"), Fields::from([("eref", "foo".to_string())]));
    assert_eq!(
        rabo_description("/BENM//NAME/Doe"),
        Fields::from([("benm", String::new()), ("name", "Doe".to_string())])
    );
    assert!(rabo_description("foo").is_empty());
}

#[test]
fn test_abn_amro_description() {
    assert_eq!(
        abn_amro_description("12.34.56.789 John Doe"),
        Fields::from([("account", "123456789".to_string())])
    );
    assert_eq!(
        abn_amro_description("GIRO 4090309"),
        Fields::from([("account", "4090309".to_string())])
    );
}

#[test]
fn test_ing_description() {
    let decoded = ing_description(
        "/EREF/EV12341REP1231456T1234//CNTP/NL32INGB0000012345/INGBNL2A/ING BANK NV INZAKE WEB//\
         /REMI/USTD//EV10001REP1231456T1234/",
    );
    let expected = Description::from([
        ("eref", FieldValue::Text("EV12341REP1231456T1234".to_string())),
        (
            "cntp",
            FieldValue::Nested(Fields::from([
                ("account_number", "NL32INGB0000012345".to_string()),
                ("bic", "INGBNL2A".to_string()),
                ("name", "ING BANK NV INZAKE WEB".to_string()),
                ("city", String::new()),
            ])),
        ),
        (
            "remi",
            FieldValue::Nested(Fields::from([
                ("code", "USTD".to_string()),
                ("issuer", String::new()),
                ("remittance_info", "EV10001REP1231456T1234".to_string()),
            ])),
        ),
    ]);
    assert_eq!(decoded, expected);
    let same = Bank::Ing.decode(
        "/EREF/EV12341REP1231456T1234//CNTP/NL32INGB0000012345/INGBNL2A/\
         ING BANK NV INZAKE WEB///REMI/USTD//EV10001REP1231456T1234/",
    );
    assert_eq!(same, expected);
}

#[test]
fn test_regiobank_description() {
    let decoded = regiobank_description(
        "1234567890 J. JANSEN\nDORPSSTRAAT 1 1234 AB DORP\nBETALINGSKENMERK 0000123456789\n",
    );
    assert_eq!(
        decoded,
        Fields::from([
            ("account_number", "1234567890".to_string()),
            ("name", "J. JANSEN".to_string()),
            ("address", "DORPSSTRAAT 1 1234 AB DORP".to_string()),
            ("reference", "BETALINGSKENMERK 0000123456789".to_string()),
        ])
    );
}
