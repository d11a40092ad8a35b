//! ISO-3166 alpha-2 country labels.
//!
//! Codes are packed big-endian into a `u16`, so "DE" is `b'D' << 8 | b'E'`.
//! The table is sorted by code; "00" is the world regulatory domain.

/// A two-letter country code and its English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iso3166Label {
    pub code: u16,
    pub name: &'static str,
}

impl Iso3166Label {
    /// The two code letters.
    pub fn letters(&self) -> [char; 2] {
        [(self.code >> 8) as u8 as char, (self.code & 0xff) as u8 as char]
    }

    /// The code as a two-letter string.
    pub fn alpha2(&self) -> String {
        self.letters().iter().collect()
    }
}

/// Packs two ASCII letters into the `u16` code used on the wire.
pub const fn pack(cc: &[u8; 2]) -> u16 {
    (cc[0] as u16) << 8 | cc[1] as u16
}

const fn label(cc: &[u8; 2], name: &'static str) -> Iso3166Label {
    Iso3166Label {
        code: pack(cc),
        name,
    }
}

pub const ISO3166_NAMES: &[Iso3166Label] = &[
    label(b"00", "World"),
    label(b"AD", "Andorra"),
    label(b"AE", "United Arab Emirates"),
    label(b"AF", "Afghanistan"),
    label(b"AG", "Antigua and Barbuda"),
    label(b"AI", "Anguilla"),
    label(b"AL", "Albania"),
    label(b"AM", "Armenia"),
    label(b"AN", "Netherlands Antilles"),
    label(b"AO", "Angola"),
    label(b"AQ", "Antarctica"),
    label(b"AR", "Argentina"),
    label(b"AS", "American Samoa"),
    label(b"AT", "Austria"),
    label(b"AU", "Australia"),
    label(b"AW", "Aruba"),
    label(b"AX", "Aland Islands"),
    label(b"AZ", "Azerbaijan"),
    label(b"BA", "Bosnia and Herzegovina"),
    label(b"BB", "Barbados"),
    label(b"BD", "Bangladesh"),
    label(b"BE", "Belgium"),
    label(b"BF", "Burkina Faso"),
    label(b"BG", "Bulgaria"),
    label(b"BH", "Bahrain"),
    label(b"BI", "Burundi"),
    label(b"BJ", "Benin"),
    label(b"BL", "Saint Barthelemy"),
    label(b"BM", "Bermuda"),
    label(b"BN", "Brunei Darussalam"),
    label(b"BO", "Bolivia"),
    label(b"BR", "Brazil"),
    label(b"BS", "Bahamas"),
    label(b"BT", "Bhutan"),
    label(b"BV", "Bouvet Island"),
    label(b"BW", "Botswana"),
    label(b"BY", "Belarus"),
    label(b"BZ", "Belize"),
    label(b"CA", "Canada"),
    label(b"CC", "Cocos (Keeling) Islands"),
    label(b"CD", "Congo"),
    label(b"CF", "Central African Republic"),
    label(b"CG", "Congo"),
    label(b"CH", "Switzerland"),
    label(b"CI", "Cote d'Ivoire"),
    label(b"CK", "Cook Islands"),
    label(b"CL", "Chile"),
    label(b"CM", "Cameroon"),
    label(b"CN", "China"),
    label(b"CO", "Colombia"),
    label(b"CR", "Costa Rica"),
    label(b"CU", "Cuba"),
    label(b"CV", "Cape Verde"),
    label(b"CX", "Christmas Island"),
    label(b"CY", "Cyprus"),
    label(b"CZ", "Czech Republic"),
    label(b"DE", "Germany"),
    label(b"DJ", "Djibouti"),
    label(b"DK", "Denmark"),
    label(b"DM", "Dominica"),
    label(b"DO", "Dominican Republic"),
    label(b"DZ", "Algeria"),
    label(b"EC", "Ecuador"),
    label(b"EE", "Estonia"),
    label(b"EG", "Egypt"),
    label(b"EH", "Western Sahara"),
    label(b"ER", "Eritrea"),
    label(b"ES", "Spain"),
    label(b"ET", "Ethiopia"),
    label(b"FI", "Finland"),
    label(b"FJ", "Fiji"),
    label(b"FK", "Falkland Islands"),
    label(b"FM", "Micronesia"),
    label(b"FO", "Faroe Islands"),
    label(b"FR", "France"),
    label(b"GA", "Gabon"),
    label(b"GB", "United Kingdom"),
    label(b"GD", "Grenada"),
    label(b"GE", "Georgia"),
    label(b"GF", "French Guiana"),
    label(b"GG", "Guernsey"),
    label(b"GH", "Ghana"),
    label(b"GI", "Gibraltar"),
    label(b"GL", "Greenland"),
    label(b"GM", "Gambia"),
    label(b"GN", "Guinea"),
    label(b"GP", "Guadeloupe"),
    label(b"GQ", "Equatorial Guinea"),
    label(b"GR", "Greece"),
    label(b"GS", "South Georgia"),
    label(b"GT", "Guatemala"),
    label(b"GU", "Guam"),
    label(b"GW", "Guinea-Bissau"),
    label(b"GY", "Guyana"),
    label(b"HK", "Hong Kong"),
    label(b"HM", "Heard and McDonald Islands"),
    label(b"HN", "Honduras"),
    label(b"HR", "Croatia"),
    label(b"HT", "Haiti"),
    label(b"HU", "Hungary"),
    label(b"ID", "Indonesia"),
    label(b"IE", "Ireland"),
    label(b"IL", "Israel"),
    label(b"IM", "Isle of Man"),
    label(b"IN", "India"),
    label(b"IO", "Chagos Islands"),
    label(b"IQ", "Iraq"),
    label(b"IR", "Iran"),
    label(b"IS", "Iceland"),
    label(b"IT", "Italy"),
    label(b"JE", "Jersey"),
    label(b"JM", "Jamaica"),
    label(b"JO", "Jordan"),
    label(b"JP", "Japan"),
    label(b"KE", "Kenya"),
    label(b"KG", "Kyrgyzstan"),
    label(b"KH", "Cambodia"),
    label(b"KI", "Kiribati"),
    label(b"KM", "Comoros"),
    label(b"KN", "Saint Kitts and Nevis"),
    label(b"KP", "North Korea"),
    label(b"KR", "South Korea"),
    label(b"KW", "Kuwait"),
    label(b"KY", "Cayman Islands"),
    label(b"KZ", "Kazakhstan"),
    label(b"LA", "Laos"),
    label(b"LB", "Lebanon"),
    label(b"LC", "Saint Lucia"),
    label(b"LI", "Liechtenstein"),
    label(b"LK", "Sri Lanka"),
    label(b"LR", "Liberia"),
    label(b"LS", "Lesotho"),
    label(b"LT", "Lithuania"),
    label(b"LU", "Luxembourg"),
    label(b"LV", "Latvia"),
    label(b"LY", "Libyan Arab Jamahiriya"),
    label(b"MA", "Morocco"),
    label(b"MC", "Monaco"),
    label(b"MD", "Moldova"),
    label(b"ME", "Montenegro"),
    label(b"MF", "Saint Martin (French part)"),
    label(b"MG", "Madagascar"),
    label(b"MH", "Marshall Islands"),
    label(b"MK", "Macedonia"),
    label(b"ML", "Mali"),
    label(b"MM", "Myanmar"),
    label(b"MN", "Mongolia"),
    label(b"MO", "Macao"),
    label(b"MP", "Northern Mariana Islands"),
    label(b"MQ", "Martinique"),
    label(b"MR", "Mauritania"),
    label(b"MS", "Montserrat"),
    label(b"MT", "Malta"),
    label(b"MU", "Mauritius"),
    label(b"MV", "Maldives"),
    label(b"MW", "Malawi"),
    label(b"MX", "Mexico"),
    label(b"MY", "Malaysia"),
    label(b"MZ", "Mozambique"),
    label(b"NA", "Namibia"),
    label(b"NC", "New Caledonia"),
    label(b"NE", "Niger"),
    label(b"NF", "Norfolk Island"),
    label(b"NG", "Nigeria"),
    label(b"NI", "Nicaragua"),
    label(b"NL", "Netherlands"),
    label(b"NO", "Norway"),
    label(b"NP", "Nepal"),
    label(b"NR", "Nauru"),
    label(b"NU", "Niue"),
    label(b"NZ", "New Zealand"),
    label(b"OM", "Oman"),
    label(b"PA", "Panama"),
    label(b"PE", "Peru"),
    label(b"PF", "French Polynesia"),
    label(b"PG", "Papua New Guinea"),
    label(b"PH", "Philippines"),
    label(b"PK", "Pakistan"),
    label(b"PL", "Poland"),
    label(b"PM", "Saint Pierre and Miquelon"),
    label(b"PN", "Pitcairn"),
    label(b"PR", "Puerto Rico"),
    label(b"PS", "Palestinian Territory"),
    label(b"PT", "Portugal"),
    label(b"PW", "Palau"),
    label(b"PY", "Paraguay"),
    label(b"QA", "Qatar"),
    label(b"RE", "Reunion"),
    label(b"RO", "Romania"),
    label(b"RS", "Serbia"),
    label(b"RU", "Russian Federation"),
    label(b"RW", "Rwanda"),
    label(b"SA", "Saudi Arabia"),
    label(b"SB", "Solomon Islands"),
    label(b"SC", "Seychelles"),
    label(b"SD", "Sudan"),
    label(b"SE", "Sweden"),
    label(b"SG", "Singapore"),
    label(b"SH", "St. Helena and Dependencies"),
    label(b"SI", "Slovenia"),
    label(b"SJ", "Svalbard and Jan Mayen"),
    label(b"SK", "Slovakia"),
    label(b"SL", "Sierra Leone"),
    label(b"SM", "San Marino"),
    label(b"SN", "Senegal"),
    label(b"SO", "Somalia"),
    label(b"SR", "Suriname"),
    label(b"ST", "Sao Tome and Principe"),
    label(b"SV", "El Salvador"),
    label(b"SY", "Syrian Arab Republic"),
    label(b"SZ", "Swaziland"),
    label(b"TC", "Turks and Caicos Islands"),
    label(b"TD", "Chad"),
    label(b"TF", "French Southern Territories"),
    label(b"TG", "Togo"),
    label(b"TH", "Thailand"),
    label(b"TJ", "Tajikistan"),
    label(b"TK", "Tokelau"),
    label(b"TL", "Timor-Leste"),
    label(b"TM", "Turkmenistan"),
    label(b"TN", "Tunisia"),
    label(b"TO", "Tonga"),
    label(b"TR", "Turkey"),
    label(b"TT", "Trinidad and Tobago"),
    label(b"TV", "Tuvalu"),
    label(b"TW", "Taiwan"),
    label(b"TZ", "Tanzania"),
    label(b"UA", "Ukraine"),
    label(b"UG", "Uganda"),
    label(b"UM", "U.S. Minor Outlying Islands"),
    label(b"US", "United States"),
    label(b"UY", "Uruguay"),
    label(b"UZ", "Uzbekistan"),
    label(b"VA", "Vatican City State"),
    label(b"VC", "St. Vincent and Grenadines"),
    label(b"VE", "Venezuela"),
    label(b"VG", "Virgin Islands, British"),
    label(b"VI", "Virgin Islands, U.S."),
    label(b"VN", "Viet Nam"),
    label(b"VU", "Vanuatu"),
    label(b"WF", "Wallis and Futuna"),
    label(b"WS", "Samoa"),
    label(b"YE", "Yemen"),
    label(b"YT", "Mayotte"),
    label(b"ZA", "South Africa"),
    label(b"ZM", "Zambia"),
    label(b"ZW", "Zimbabwe"),
];

/// Finds the label for a packed country code.
pub fn lookup(code: u16) -> Option<&'static Iso3166Label> {
    ISO3166_NAMES
        .binary_search_by_key(&code, |l| l.code)
        .ok()
        .map(|i| &ISO3166_NAMES[i])
}
