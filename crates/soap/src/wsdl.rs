//! Service description served at `GET /product_service?wsdl`.

use quick_xml::escape::escape;

use crate::config::SoapConfig;
use crate::operations::OPERATIONS;

/// Request parameters per operation as `(name, xsd type, optional)`.
fn parameters(operation: &str) -> &'static [(&'static str, &'static str, bool)] {
    match operation {
        "createProduct" => &[
            ("product_id", "xs:integer", false),
            ("name", "xs:string", false),
            ("quantity", "xs:integer", false),
            ("price", "xs:float", false),
        ],
        "updateProduct" => &[
            ("product_id", "xs:integer", false),
            ("new_quantity", "xs:integer", true),
            ("new_price", "xs:float", true),
        ],
        _ => &[("product_id", "xs:integer", false)],
    }
}

/// Render the WSDL 1.1 document for the configured namespace and endpoint.
pub fn document(config: &SoapConfig) -> String {
    let ns = escape(config.namespace.as_str()).into_owned();
    let endpoint = escape(config.endpoint_url().as_str()).into_owned();

    let mut types = String::new();
    let mut messages = String::new();
    let mut port_ops = String::new();
    let mut binding_ops = String::new();

    for op in OPERATIONS {
        types.push_str(&format!("<xs:element name=\"{op}\"><xs:complexType><xs:sequence>"));
        for (name, ty, optional) in parameters(op) {
            if *optional {
                types.push_str(&format!(
                    "<xs:element name=\"{name}\" type=\"{ty}\" minOccurs=\"0\" nillable=\"true\"/>"
                ));
            } else {
                types.push_str(&format!("<xs:element name=\"{name}\" type=\"{ty}\"/>"));
            }
        }
        types.push_str("</xs:sequence></xs:complexType></xs:element>");
        types.push_str(&format!(
            "<xs:element name=\"{op}Response\"><xs:complexType><xs:sequence>\
             <xs:element name=\"{op}Result\" type=\"xs:string\" minOccurs=\"0\" nillable=\"true\"/>\
             </xs:sequence></xs:complexType></xs:element>"
        ));

        messages.push_str(&format!(
            "<wsdl:message name=\"{op}\"><wsdl:part name=\"{op}\" element=\"tns:{op}\"/></wsdl:message>\
             <wsdl:message name=\"{op}Response\"><wsdl:part name=\"{op}Response\" element=\"tns:{op}Response\"/></wsdl:message>"
        ));

        port_ops.push_str(&format!(
            "<wsdl:operation name=\"{op}\">\
             <wsdl:input name=\"{op}\" message=\"tns:{op}\"/>\
             <wsdl:output name=\"{op}Response\" message=\"tns:{op}Response\"/>\
             </wsdl:operation>"
        ));

        binding_ops.push_str(&format!(
            "<wsdl:operation name=\"{op}\">\
             <soap:operation soapAction=\"{op}\" style=\"document\"/>\
             <wsdl:input name=\"{op}\"><soap:body use=\"literal\"/></wsdl:input>\
             <wsdl:output name=\"{op}Response\"><soap:body use=\"literal\"/></wsdl:output>\
             </wsdl:operation>"
        ));
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <wsdl:definitions xmlns:wsdl=\"http://schemas.xmlsoap.org/wsdl/\" \
         xmlns:soap=\"http://schemas.xmlsoap.org/wsdl/soap/\" \
         xmlns:xs=\"http://www.w3.org/2001/XMLSchema\" \
         xmlns:tns=\"{ns}\" targetNamespace=\"{ns}\" name=\"ProductService\">\
         <wsdl:types>\
         <xs:schema targetNamespace=\"{ns}\" elementFormDefault=\"qualified\">{types}</xs:schema>\
         </wsdl:types>\
         {messages}\
         <wsdl:portType name=\"ProductService\">{port_ops}</wsdl:portType>\
         <wsdl:binding name=\"ProductService\" type=\"tns:ProductService\">\
         <soap:binding style=\"document\" transport=\"http://schemas.xmlsoap.org/soap/http\"/>\
         {binding_ops}\
         </wsdl:binding>\
         <wsdl:service name=\"ProductService\">\
         <wsdl:port name=\"ProductService\" binding=\"tns:ProductService\">\
         <soap:address location=\"{endpoint}\"/>\
         </wsdl:port>\
         </wsdl:service>\
         </wsdl:definitions>"
    )
}
